//! Content module - entries, collections, and enabled-flag filtering

pub mod collection;
mod entry;
pub mod filter;
pub mod frontmatter;
pub mod loader;

pub use collection::{Collection, Source};
pub use entry::{collect_entries, Entry};
pub use filter::{filter_enabled, filter_enabled_deep, Enabled};
pub use loader::ContentLoader;
