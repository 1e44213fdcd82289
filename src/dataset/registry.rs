//! Recognized dataset keys and their bundled fallback payloads

use indexmap::IndexMap;
use lazy_static::lazy_static;

/// A dataset the site knows how to serve
#[derive(Debug)]
pub struct DatasetSpec {
    /// Key in the key-value store, also the fallback file name
    pub key: &'static str,
    /// Placeholder payload compiled into the binary
    pub fallback: &'static str,
}

macro_rules! dataset {
    ($key:literal) => {
        DatasetSpec {
            key: $key,
            fallback: include_str!(concat!("../../data/fallback/", $key)),
        }
    };
}

lazy_static! {
    static ref REGISTRY: IndexMap<&'static str, DatasetSpec> = [
        dataset!("bank-programs.json"),
        dataset!("flight-programs.json"),
        dataset!("hotel-programs.json"),
        dataset!("travel-essentials.json"),
        dataset!("points-conversions.json"),
    ]
    .into_iter()
    .map(|spec| (spec.key, spec))
    .collect();
}

/// Look up a recognized dataset
pub fn lookup(key: &str) -> Option<&'static DatasetSpec> {
    REGISTRY.get(key)
}

/// All recognized keys, in registration order
pub fn keys() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}
