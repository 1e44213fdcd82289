//! List a collection

use anyhow::Result;
use serde_json::Value;

use crate::cache::ContentScope;
use crate::Site;

/// Print slug and title of every visible entry
pub async fn run(site: &Site, collection: &str) -> Result<()> {
    let loader = site.loader();
    let scope = ContentScope::new(&loader);
    let entries = scope.collection(collection)?.all().await?;

    println!("{} ({}):", collection, entries.len());
    for entry in entries {
        let title = entry.title().unwrap_or("(untitled)");
        match entry.get("date").and_then(Value::as_str) {
            Some(date) => println!("  {} - {} ({})", entry.slug(), title, date),
            None => println!("  {} - {}", entry.slug(), title),
        }
    }

    Ok(())
}
