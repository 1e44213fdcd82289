//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Namespace the published datasets live under in the key-value store
pub const DEFAULT_NAMESPACE: &str = "MilesGoRound";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    /// Optional directory whose files override the bundled fallback payloads
    pub fallback_dir: Option<String>,

    // Key-value store binding (unbound when absent)
    pub kv: Option<KvBindingConfig>,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Miles Go Round".to_string(),
            url: "http://localhost:4000".to_string(),
            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            fallback_dir: None,
            kv: None,
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Key-value store binding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KvBindingConfig {
    pub namespace: String,
    /// Root directory of the directory-backed store
    pub path: String,
}

impl Default for KvBindingConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            path: ".kv".to_string(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.public_dir, "public");
        assert!(config.kv.is_none());
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Points Desk
kv:
  path: /var/lib/kv
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Points Desk");
        let kv = config.kv.unwrap();
        assert_eq!(kv.namespace, DEFAULT_NAMESPACE);
        assert_eq!(kv.path, "/var/lib/kv");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
    }
}
