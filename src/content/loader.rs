//! Content loader - loads collections from datasets and MDX sources

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::collection::{self, Collection, Source};
use super::{collect_entries, frontmatter, Entry};
use crate::dataset::DatasetResolver;
use crate::error::DatasetError;
use crate::kv::KvStore;

/// Loads whole collections, already filtered and ready to render
pub struct ContentLoader<S> {
    resolver: DatasetResolver<S>,
    content_dir: PathBuf,
}

impl<S: KvStore> ContentLoader<S> {
    /// Create a new content loader
    pub fn new<P: AsRef<Path>>(resolver: DatasetResolver<S>, content_dir: P) -> Self {
        Self {
            resolver,
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    pub fn resolver(&self) -> &DatasetResolver<S> {
        &self.resolver
    }

    /// Load every entry of a collection
    pub async fn load(&self, collection: &Collection) -> Result<Vec<Entry>, DatasetError> {
        match collection.source {
            Source::Dataset(key) => self.resolver.load_entries(key).await,
            Source::Mdx(dir) => {
                let dir = self.content_dir.join(dir);
                let name = collection.name;
                tokio::task::spawn_blocking(move || load_mdx_dir(name, &dir))
                    .await
                    .map_err(|e| DatasetError::retrieval(name, e))
            }
        }
    }

    /// Load a collection by name
    pub async fn load_named(&self, name: &str) -> Result<Vec<Entry>, DatasetError> {
        let collection =
            collection::find(name).ok_or_else(|| DatasetError::DatasetNotFound(name.to_string()))?;
        self.load(collection).await
    }
}

/// Load all MDX documents under `dir`, newest first
fn load_mdx_dir(name: &str, dir: &Path) -> Vec<Entry> {
    if !dir.exists() {
        tracing::debug!("No content directory for {} at {:?}", name, dir);
        return Vec::new();
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_mdx_file(path) {
            match load_document(path) {
                Ok(document) => documents.push(document),
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                }
            }
        }
    }

    // Sort by date descending (newest first), undated last, then by slug
    documents.sort_by(|(a_date, a), (b_date, b)| {
        b_date
            .cmp(a_date)
            .then_with(|| a["slug"].as_str().cmp(&b["slug"].as_str()))
    });

    let items = documents.into_iter().map(|(_, document)| document).collect();
    collect_entries(name, items)
}

/// Read one MDX document into an entry-shaped object
fn load_document(path: &Path) -> Result<(Option<DateTime<Utc>>, Value)> {
    let content = fs::read_to_string(path)?;
    let (mut fields, body) = frontmatter::parse(&content)?;

    // Slug from front-matter, else from the file name
    if !fields.get("slug").is_some_and(Value::is_string) {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");
        fields.insert("slug".to_string(), Value::String(slug::slugify(stem)));
    }

    let date = fields
        .get("date")
        .and_then(Value::as_str)
        .and_then(frontmatter::parse_date);

    fields.insert("body".to_string(), Value::String(body.to_string()));

    Ok((date, Value::Object(fields)))
}

/// Check if a file is an MDX or markdown document
fn is_mdx_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "mdx" || e == "md")
        .unwrap_or(false)
}
