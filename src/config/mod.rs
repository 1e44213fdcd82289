//! Configuration module

mod runtime;
mod site;

pub use runtime::{Environment, RuntimeConfig, PRODUCTION_BUILD_PHASE};
pub use site::{KvBindingConfig, ServerConfig, SiteConfig, DEFAULT_NAMESPACE};
