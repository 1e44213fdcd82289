//! Collection definitions
//!
//! A collection is the full set of entries behind one page type.

/// Where a collection's entries come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A JSON dataset resolved through the key-value store
    Dataset(&'static str),
    /// MDX documents in a directory under the content root
    Mdx(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub name: &'static str,
    pub source: Source,
}

pub const COLLECTIONS: &[Collection] = &[
    Collection {
        name: "journals",
        source: Source::Mdx("journals"),
    },
    Collection {
        name: "bank-programs",
        source: Source::Dataset("bank-programs.json"),
    },
    Collection {
        name: "flight-programs",
        source: Source::Dataset("flight-programs.json"),
    },
    Collection {
        name: "hotel-programs",
        source: Source::Dataset("hotel-programs.json"),
    },
    Collection {
        name: "travel-essentials",
        source: Source::Dataset("travel-essentials.json"),
    },
    Collection {
        name: "points-conversions",
        source: Source::Dataset("points-conversions.json"),
    },
];

/// Find a collection by name
pub fn find(name: &str) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::registry;

    #[test]
    fn test_find() {
        assert_eq!(find("journals").unwrap().source, Source::Mdx("journals"));
        assert!(find("credit-cards").is_none());
    }

    #[test]
    fn test_dataset_collections_are_registered() {
        for collection in COLLECTIONS {
            if let Source::Dataset(key) = collection.source {
                assert!(registry::lookup(key).is_some(), "{} is not registered", key);
            }
        }
    }
}
