//! Key-value store access
//!
//! Published datasets live as JSON text blobs in a namespaced key-value
//! store. The resolver only ever reads from it; absence of a key is a normal
//! outcome and is reported as `Ok(None)`.

mod dir;

pub use dir::DirStore;

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a store that is bound but fails to answer
#[derive(Debug, Error)]
pub enum KvError {
    #[error("IO error when reading `{0}`: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid key `{0}`")]
    InvalidKey(String),
}

/// Read-only view of a namespaced key-value store
pub trait KvStore: Send + Sync {
    /// Look up `key` in `namespace`, returning the stored text if present
    fn get(
        &self,
        namespace: &str,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, KvError>> + Send;
}

/// In-process store, used for seeding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<(String, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, namespace: &str, key: &str, value: impl Into<String>) {
        self.entries
            .insert((namespace.to_string(), key.to_string()), value.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, namespace: &str, key: &str, value: impl Into<String>) -> Self {
        self.insert(namespace, key, value);
        self
    }
}

impl KvStore for MemoryStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, KvError> {
        Ok(self
            .entries
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }
}
