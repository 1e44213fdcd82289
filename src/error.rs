//! Error taxonomy for dataset resolution and slug lookups

use thiserror::Error;

/// Errors produced while resolving datasets and collections.
///
/// The type is `Clone` so that a failed load cached in a
/// [`SlugResolver`](crate::cache::SlugResolver) can be handed to every
/// caller in the same scope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// The dataset key or collection name is not recognized.
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    /// The collection loaded fine but holds no entry with this slug.
    #[error("entry `{slug}` not found in `{collection}`")]
    EntryNotFound { collection: String, slug: String },

    /// The remote store binding is missing and fallback is not permitted.
    #[error("key-value binding `{binding}` is not configured (dataset `{key}`)")]
    Configuration { binding: String, key: String },

    /// The store (or a local source) was reachable but the read failed.
    #[error("failed to retrieve dataset `{key}`: {cause}")]
    Retrieval { key: String, cause: String },
}

impl DatasetError {
    pub fn retrieval(key: &str, cause: impl std::fmt::Display) -> Self {
        Self::Retrieval {
            key: key.to_string(),
            cause: cause.to_string(),
        }
    }

    /// Whether this is an expected "not found" outcome rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DatasetNotFound(_) | Self::EntryNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::Configuration {
            binding: "MilesGoRound".to_string(),
            key: "bank-programs.json".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("MilesGoRound"));
        assert!(display.contains("bank-programs.json"));

        let err = DatasetError::retrieval("journals", "connection reset");
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_not_found_classification() {
        assert!(DatasetError::DatasetNotFound("x.json".into()).is_not_found());
        assert!(DatasetError::EntryNotFound {
            collection: "journals".into(),
            slug: "missing".into(),
        }
        .is_not_found());
        assert!(!DatasetError::retrieval("x.json", "boom").is_not_found());
    }
}
