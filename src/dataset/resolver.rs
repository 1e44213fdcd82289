//! Dataset source resolution
//!
//! Sources are tried in a fixed order:
//!
//! 1. the namespaced key-value store, when bound and holding the key;
//! 2. the local fallback payload, when the runtime permits degraded
//!    operation (non-production, `ALLOW_EMPTY_DATA`, or a static build);
//! 3. otherwise an error: `Configuration` for a missing binding, or
//!    `DatasetNotFound` when a bound store lacks the key.
//!
//! A store that is bound but fails to answer is a `Retrieval` error and is
//! never masked by the fallback.

use std::path::Path;

use serde_json::Value;

use super::fallback::FallbackSource;
use super::registry;
use crate::config::{RuntimeConfig, DEFAULT_NAMESPACE};
use crate::content::{collect_entries, Entry};
use crate::error::DatasetError;
use crate::kv::KvStore;

/// Which source produced a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Store,
    Fallback,
}

/// Raw dataset text together with its origin
#[derive(Debug, Clone)]
pub struct ResolvedDataset {
    pub key: String,
    pub text: String,
    pub origin: Origin,
}

pub struct DatasetResolver<S> {
    store: Option<S>,
    namespace: String,
    runtime: RuntimeConfig,
    fallback: FallbackSource,
}

impl<S: KvStore> DatasetResolver<S> {
    /// Create a resolver; `None` means the store is not bound
    pub fn new(store: Option<S>, runtime: RuntimeConfig) -> Self {
        Self {
            store,
            namespace: DEFAULT_NAMESPACE.to_string(),
            runtime,
            fallback: FallbackSource::bundled(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_fallback_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.fallback = FallbackSource::with_dir(dir);
        self
    }

    /// Fetch the raw JSON text for a dataset key
    pub async fn fetch(&self, key: &str) -> Result<ResolvedDataset, DatasetError> {
        // Unknown keys never reach the store
        let spec =
            registry::lookup(key).ok_or_else(|| DatasetError::DatasetNotFound(key.to_string()))?;

        let reason = match &self.store {
            Some(store) => match store.get(&self.namespace, key).await {
                Ok(Some(text)) => {
                    tracing::debug!("Loaded {} from namespace {}", key, self.namespace);
                    return Ok(ResolvedDataset {
                        key: key.to_string(),
                        text,
                        origin: Origin::Store,
                    });
                }
                Ok(None) => "key missing from store",
                Err(e) => {
                    tracing::error!(
                        dataset = key,
                        namespace = %self.namespace,
                        "Dataset retrieval failed: {}",
                        e
                    );
                    return Err(DatasetError::retrieval(key, e));
                }
            },
            None => "store not bound",
        };

        if !self.runtime.fallback_allowed() {
            if self.store.is_some() {
                tracing::debug!("{} not present in namespace {}", key, self.namespace);
                return Err(DatasetError::DatasetNotFound(key.to_string()));
            }
            tracing::error!(
                dataset = key,
                binding = %self.namespace,
                "Key-value binding missing in production, refusing to serve fallback"
            );
            return Err(DatasetError::Configuration {
                binding: self.namespace.clone(),
                key: key.to_string(),
            });
        }

        tracing::warn!(dataset = key, "Serving fallback payload ({})", reason);
        let text = self.fallback.payload(spec).await?;
        Ok(ResolvedDataset {
            key: key.to_string(),
            text,
            origin: Origin::Fallback,
        })
    }

    /// Fetch a dataset and turn it into filtered entries
    pub async fn load_entries(&self, key: &str) -> Result<Vec<Entry>, DatasetError> {
        let resolved = self.fetch(key).await?;
        parse_entries(key, &resolved.text)
    }
}

/// Parse dataset text into filtered entries
pub fn parse_entries(key: &str, text: &str) -> Result<Vec<Entry>, DatasetError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => Ok(collect_entries(key, items)),
        Ok(_) => {
            tracing::error!(dataset = key, "Dataset is not a JSON array");
            Err(DatasetError::retrieval(key, "expected a JSON array"))
        }
        Err(e) => {
            tracing::error!(dataset = key, "Dataset is not valid JSON: {}", e);
            Err(DatasetError::retrieval(key, e))
        }
    }
}
