//! Run the dataset server

use anyhow::Result;

use crate::server::{self, AppState};
use crate::Site;

/// Serve datasets and collections over HTTP
pub async fn run(site: &Site, ip: &str, port: u16) -> Result<()> {
    if site.store().is_none() {
        if site.runtime.fallback_allowed() {
            tracing::warn!("No key-value binding configured, serving fallback payloads");
        } else {
            tracing::warn!("No key-value binding configured, dataset requests will fail");
        }
    }

    server::start(AppState::new(site.loader()), ip, port).await
}
