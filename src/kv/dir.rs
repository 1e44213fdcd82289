//! Directory-backed key-value store
//!
//! Each namespace is a directory under the store root and each key a file
//! inside it: `<root>/<namespace>/<key>`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KvError, KvStore};

#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, namespace: &str, key: &str) -> Result<PathBuf, KvError> {
        for part in [namespace, key] {
            if !is_plain_name(part) {
                return Err(KvError::InvalidKey(part.to_string()));
            }
        }
        Ok(self.root.join(namespace).join(key))
    }
}

impl KvStore for DirStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, KvError> {
        let path = self.path_for(namespace, key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvError::Io(path, e)),
        }
    }
}

/// A single path component without separators or parent references
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_existing_key() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("MilesGoRound")).unwrap();
        fs::write(
            dir.path().join("MilesGoRound").join("bank-programs.json"),
            r#"[{"slug":"amex"}]"#,
        )
        .unwrap();

        let store = DirStore::new(dir.path());
        let value = store.get("MilesGoRound", "bank-programs.json").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"[{"slug":"amex"}]"#));
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = DirStore::new(dir.path());
        let value = store.get("MilesGoRound", "journals.json").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        let store = DirStore::new(dir.path());
        let err = store.get("MilesGoRound", "../secrets").await.unwrap_err();
        assert!(matches!(err, KvError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_unreadable_key_is_error() {
        let dir = TempDir::new().unwrap();
        // A directory where a file is expected cannot be read as text
        fs::create_dir_all(dir.path().join("MilesGoRound").join("hotel-programs.json")).unwrap();

        let store = DirStore::new(dir.path());
        let err = store
            .get("MilesGoRound", "hotel-programs.json")
            .await
            .unwrap_err();
        assert!(matches!(err, KvError::Io(..)));
    }
}
