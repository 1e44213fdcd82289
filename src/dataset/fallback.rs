//! Local fallback payloads

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::registry::DatasetSpec;
use crate::error::DatasetError;

/// Where fallback payloads come from: an optional override directory,
/// then the payload compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct FallbackSource {
    dir: Option<PathBuf>,
}

impl FallbackSource {
    pub fn bundled() -> Self {
        Self::default()
    }

    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    pub async fn payload(&self, spec: &DatasetSpec) -> Result<String, DatasetError> {
        if let Some(dir) = &self.dir {
            let path = dir.join(spec.key);
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => {
                    tracing::debug!("Using fallback override {:?}", path);
                    return Ok(content);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::error!(
                        dataset = spec.key,
                        "Failed to read fallback override {:?}: {}",
                        path,
                        e
                    );
                    return Err(DatasetError::retrieval(spec.key, e));
                }
            }
        }

        Ok(spec.fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::registry;
    use crate::testing::capture_logs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_bundled_payload() {
        let spec = registry::lookup("travel-essentials.json").unwrap();
        let payload = FallbackSource::bundled().payload(spec).await.unwrap();
        assert_eq!(payload, spec.fallback);
    }

    #[tokio::test]
    async fn test_override_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("hotel-programs.json"), r#"[{"slug":"local"}]"#).unwrap();

        let source = FallbackSource::with_dir(dir.path());

        let spec = registry::lookup("hotel-programs.json").unwrap();
        assert_eq!(source.payload(spec).await.unwrap(), r#"[{"slug":"local"}]"#);

        // Keys without an override file still use the bundled payload
        let spec = registry::lookup("bank-programs.json").unwrap();
        assert_eq!(source.payload(spec).await.unwrap(), spec.fallback);
    }

    #[tokio::test]
    async fn test_unreadable_override_is_logged() {
        let (logs, _guard) = capture_logs();
        let dir = TempDir::new().unwrap();
        // A directory where the override file should be cannot be read
        std::fs::create_dir(dir.path().join("bank-programs.json")).unwrap();

        let spec = registry::lookup("bank-programs.json").unwrap();
        let err = FallbackSource::with_dir(dir.path())
            .payload(spec)
            .await
            .unwrap_err();
        assert!(matches!(err, DatasetError::Retrieval { .. }));

        let output = logs.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains("Failed to read fallback override"));
    }
}
