//! Per-request content scope

use indexmap::IndexMap;

use super::SlugResolver;
use crate::content::collection::COLLECTIONS;
use crate::content::{ContentLoader, Entry};
use crate::error::DatasetError;
use crate::kv::KvStore;

/// One slug resolver per collection, owned by a single request or build.
///
/// Build a fresh scope for every request; dropping it discards every
/// cached collection, so nothing leaks into the next lifetime.
pub struct ContentScope<'a> {
    resolvers: IndexMap<&'static str, SlugResolver<'a, Entry>>,
}

impl<'a> ContentScope<'a> {
    pub fn new<S: KvStore + 'a>(loader: &'a ContentLoader<S>) -> Self {
        let resolvers = COLLECTIONS
            .iter()
            .map(|collection| {
                let resolver = SlugResolver::new(collection.name, move || loader.load(collection));
                (collection.name, resolver)
            })
            .collect();

        Self { resolvers }
    }

    /// The resolver for a named collection
    pub fn collection(&self, name: &str) -> Result<&SlugResolver<'a, Entry>, DatasetError> {
        self.resolvers
            .get(name)
            .ok_or_else(|| DatasetError::DatasetNotFound(name.to_string()))
    }

    /// Collection names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        COLLECTIONS.iter().map(|collection| collection.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeConfig;
    use crate::dataset::DatasetResolver;
    use crate::kv::MemoryStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_scope_resolves_collections_lazily() {
        let tmp = TempDir::new().unwrap();
        let store = MemoryStore::new().with(
            "MilesGoRound",
            "bank-programs.json",
            r#"[{"slug": "amex"}, {"slug": "chase"}, {"slug": "citi"}]"#,
        );
        let loader = ContentLoader::new(
            DatasetResolver::new(Some(store), RuntimeConfig::production()),
            tmp.path(),
        );
        let scope = ContentScope::new(&loader);

        let banks = scope.collection("bank-programs").unwrap();
        assert!(!banks.is_loaded());

        let nav = banks.adjacent("chase").await.unwrap();
        assert_eq!(nav.previous.map(Entry::slug), Some("amex"));
        assert_eq!(nav.next.map(Entry::slug), Some("citi"));

        // Other collections stay untouched
        assert!(!scope.collection("flight-programs").unwrap().is_loaded());
        assert!(scope.names().any(|n| n == "journals"));
    }

    #[tokio::test]
    async fn test_unknown_collection() {
        let tmp = TempDir::new().unwrap();
        let loader = ContentLoader::new(
            DatasetResolver::<MemoryStore>::new(None, RuntimeConfig::development()),
            tmp.path(),
        );
        let scope = ContentScope::new(&loader);
        assert!(matches!(
            scope.collection("credit-cards"),
            Err(DatasetError::DatasetNotFound(_))
        ));
    }

    #[test]
    fn test_names_follow_registration_order() {
        let tmp = TempDir::new().unwrap();
        let loader = ContentLoader::new(
            DatasetResolver::<MemoryStore>::new(None, RuntimeConfig::development()),
            tmp.path(),
        );
        let scope = ContentScope::new(&loader);

        let names: Vec<_> = scope.names().collect();
        for name in &names {
            assert!(scope.collection(name).is_ok());
        }
        drop(scope);

        let expected: Vec<_> = COLLECTIONS.iter().map(|c| c.name).collect();
        assert_eq!(names, expected);
        assert_eq!(names[0], "journals");
    }
}
