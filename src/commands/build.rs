//! Static generation
//!
//! Writes every collection under the public directory:
//! `<public>/<collection>/index.json` with the visible entries, and one
//! `<public>/<collection>/<slug>.json` per entry with its neighbours.

use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::cache::ContentScope;
use crate::Site;

/// Build every collection
pub async fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = site.loader();
    let scope = ContentScope::new(&loader);
    let mut total = 0;

    for name in scope.names() {
        let resolver = scope.collection(name)?;
        let entries = resolver.all().await?;

        // Pages from a previous build may belong to entries disabled since
        let out_dir = site.public_dir.join(name);
        if out_dir.exists() {
            fs::remove_dir_all(&out_dir)?;
        }
        fs::create_dir_all(&out_dir)?;
        write_json(&out_dir.join("index.json"), &json!(entries))?;

        for entry in entries {
            let slug = entry.slug();
            if !is_file_safe(slug) {
                tracing::warn!("Skipping {} entry with unsafe slug {:?}", name, slug);
                continue;
            }

            let nav = resolver.adjacent(slug).await?;
            let page = json!({
                "entry": entry,
                "previous": nav.previous,
                "next": nav.next,
            });
            write_json(&out_dir.join(format!("{}.json", slug)), &page)?;
        }

        tracing::info!("Built {} ({} entries)", name, entries.len());
        total += entries.len();
    }

    let duration = start.elapsed();
    tracing::info!(
        "Wrote {} entries in {:.2}s",
        total,
        duration.as_secs_f64()
    );

    Ok(())
}

fn write_json(path: &Path, value: &serde_json::Value) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Slugs become file names, so they must stay inside the output directory
fn is_file_safe(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}
