//! Cache module for request-scoped collection lookups
//!
//! A [`SlugResolver`] wraps a collection loader and memoizes its result for
//! the lifetime of one request or build. The loader runs at most once: the
//! first caller starts the load, concurrent callers wait for that same load,
//! and later callers reuse the cached result (including a cached failure,
//! since there is no retry within a lifetime).

mod scope;

pub use scope::ContentScope;

use std::future::Future;
use std::pin::Pin;

use percent_encoding::percent_decode_str;
use tokio::sync::OnceCell;

use crate::content::Entry;
use crate::error::DatasetError;

/// Boxed future returned by a collection loader
pub type LoadFuture<'a, T> = Pin<Box<dyn Future<Output = Result<Vec<T>, DatasetError>> + Send + 'a>>;

type Loader<'a, T> = Box<dyn Fn() -> LoadFuture<'a, T> + Send + Sync + 'a>;

/// Items addressable by slug
pub trait Slugged {
    fn slug(&self) -> &str;
}

impl Slugged for Entry {
    fn slug(&self) -> &str {
        Entry::slug(self)
    }
}

/// A route parameter resolved against a collection
#[derive(Debug)]
pub struct SlugMatch<'r, T> {
    /// The decoded slug
    pub slug: String,
    /// The matching entry, if any
    pub entity: Option<&'r T>,
}

/// Neighbours of an entry in collection order
#[derive(Debug)]
pub struct Adjacent<'r, T> {
    pub previous: Option<&'r T>,
    pub next: Option<&'r T>,
}

impl<T> Adjacent<'_, T> {
    fn none() -> Self {
        Self {
            previous: None,
            next: None,
        }
    }
}

/// Memoized, slug-addressable view of one collection
pub struct SlugResolver<'a, T> {
    name: String,
    loader: Loader<'a, T>,
    cell: OnceCell<Result<Vec<T>, DatasetError>>,
}

impl<'a, T: Slugged> SlugResolver<'a, T> {
    pub fn new<F, Fut>(name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'a,
        Fut: Future<Output = Result<Vec<T>, DatasetError>> + Send + 'a,
    {
        Self {
            name: name.into(),
            loader: Box::new(move || -> LoadFuture<'a, T> { Box::pin(loader()) }),
            cell: OnceCell::new(),
        }
    }

    /// Whether the collection has been loaded in this lifetime
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// The full collection, loading it on first use
    pub async fn all(&self) -> Result<&[T], DatasetError> {
        let loaded = self
            .cell
            .get_or_init(|| async {
                tracing::debug!("Loading collection {}", self.name);
                (self.loader)().await
            })
            .await;

        match loaded {
            Ok(items) => Ok(items.as_slice()),
            Err(e) => Err(e.clone()),
        }
    }

    /// First entry whose slug equals `slug`
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<&T>, DatasetError> {
        let items = self.all().await?;
        Ok(items.iter().find(|item| item.slug() == slug))
    }

    /// Resolve a raw (percent-encoded) route parameter
    pub async fn from_params(&self, param: &str) -> Result<SlugMatch<'_, T>, DatasetError> {
        let slug = percent_decode_str(param).decode_utf8_lossy().into_owned();
        let entity = self.find_by_slug(&slug).await?;
        Ok(SlugMatch { slug, entity })
    }

    /// Entries immediately before and after `slug` in collection order
    pub async fn adjacent(&self, slug: &str) -> Result<Adjacent<'_, T>, DatasetError> {
        let items = self.all().await?;

        let Some(pos) = items.iter().position(|item| item.slug() == slug) else {
            return Ok(Adjacent::none());
        };

        Ok(Adjacent {
            previous: pos.checked_sub(1).and_then(|i| items.get(i)),
            next: items.get(pos + 1),
        })
    }
}
