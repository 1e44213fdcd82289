//! milesgoround: content dataset resolution for a travel-rewards site
//!
//! Collections of journals and loyalty-program explainers are read from a
//! namespaced key-value store (or bundled fallbacks, or MDX front-matter),
//! stripped of disabled entries and nested items, and exposed through
//! request-scoped slug lookups.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod dataset;
pub mod error;
pub mod kv;
pub mod server;

#[cfg(test)]
mod testing;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::DatasetError;

/// The site being served or built
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Runtime switches resolved at startup
    pub runtime: config::RuntimeConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// MDX content directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P, runtime: config::RuntimeConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            runtime,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// The bound key-value store, if the configuration declares one
    pub fn store(&self) -> Option<kv::DirStore> {
        self.config
            .kv
            .as_ref()
            .map(|kv| kv::DirStore::new(self.base_dir.join(&kv.path)))
    }

    pub fn resolver(&self) -> dataset::DatasetResolver<kv::DirStore> {
        let mut resolver = dataset::DatasetResolver::new(self.store(), self.runtime.clone());
        if let Some(kv) = &self.config.kv {
            resolver = resolver.with_namespace(kv.namespace.clone());
        }
        if let Some(dir) = &self.config.fallback_dir {
            resolver = resolver.with_fallback_dir(self.base_dir.join(dir));
        }
        resolver
    }

    pub fn loader(&self) -> content::ContentLoader<kv::DirStore> {
        content::ContentLoader::new(self.resolver(), &self.content_dir)
    }
}
