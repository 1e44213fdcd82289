//! Show one entry

use anyhow::Result;
use serde_json::json;

use crate::cache::ContentScope;
use crate::content::Entry;
use crate::error::DatasetError;
use crate::Site;

/// Print an entry as JSON along with its neighbours' slugs
pub async fn run(site: &Site, collection: &str, slug: &str) -> Result<()> {
    let loader = site.loader();
    let scope = ContentScope::new(&loader);
    let resolver = scope.collection(collection)?;

    let matched = resolver.from_params(slug).await?;
    let entry = matched.entity.ok_or_else(|| DatasetError::EntryNotFound {
        collection: collection.to_string(),
        slug: matched.slug.clone(),
    })?;
    let nav = resolver.adjacent(&matched.slug).await?;

    let output = json!({
        "entry": entry,
        "previous": nav.previous.map(Entry::slug),
        "next": nav.next.map(Entry::slug),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
