//! Dataset module - resolves named datasets from the key-value store or
//! local fallbacks

mod fallback;
pub mod registry;
mod resolver;

pub use fallback::FallbackSource;
pub use registry::DatasetSpec;
pub use resolver::{parse_entries, DatasetResolver, Origin, ResolvedDataset};
