//! HTTP boundary
//!
//! Serves raw datasets and filtered collections as JSON. Every request gets
//! its own [`ContentScope`], so collections are loaded at most once per
//! request and never shared between requests.

use anyhow::Result;
use axum::{
    extract::{Path, RawPathParams, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::cache::ContentScope;
use crate::content::{ContentLoader, Entry};
use crate::error::DatasetError;
use crate::kv::KvStore;

/// Server state
pub struct AppState<S> {
    pub loader: ContentLoader<S>,
}

impl<S> AppState<S> {
    pub fn new(loader: ContentLoader<S>) -> Self {
        Self { loader }
    }
}

/// Build the router
pub fn router<S: KvStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/datasets/:key", get(dataset_handler::<S>))
        .route("/api/collections/:name", get(collection_handler::<S>))
        .route("/api/collections/:name/:slug", get(entry_handler::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start<S: KvStore + 'static>(state: AppState<S>, ip: &str, port: u16) -> Result<()> {
    let app = router(Arc::new(state));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Raw dataset text, exactly as stored
async fn dataset_handler<S: KvStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(key): Path<String>,
) -> Result<Response, DatasetError> {
    let resolved = state.loader.resolver().fetch(&key).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], resolved.text).into_response())
}

/// Filtered entries of a collection
async fn collection_handler<S: KvStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Entry>>, DatasetError> {
    let scope = ContentScope::new(&state.loader);
    let entries = scope.collection(&name)?.all().await?;
    Ok(Json(entries.to_vec()))
}

/// One entry with its previous/next neighbours
async fn entry_handler<S: KvStore>(
    State(state): State<Arc<AppState<S>>>,
    params: RawPathParams,
) -> Result<Json<Value>, DatasetError> {
    let mut name = "";
    let mut raw_slug = "";
    for (key, value) in &params {
        match key {
            "name" => name = value,
            "slug" => raw_slug = value,
            _ => {}
        }
    }

    let scope = ContentScope::new(&state.loader);
    let collection = scope.collection(name)?;

    let matched = collection.from_params(raw_slug).await?;
    let Some(entry) = matched.entity else {
        return Err(DatasetError::EntryNotFound {
            collection: name.to_string(),
            slug: matched.slug,
        });
    };

    let nav = collection.adjacent(&matched.slug).await?;
    Ok(Json(json!({
        "entry": entry,
        "previous": nav.previous,
        "next": nav.next,
    })))
}

impl IntoResponse for DatasetError {
    fn into_response(self) -> Response {
        // Failures were logged with their cause where they happened;
        // the body never carries internal detail.
        if self.is_not_found() {
            tracing::debug!("{}", self);
        }

        let (status, message) = match &self {
            Self::DatasetNotFound(_) => (StatusCode::NOT_FOUND, "Dataset not found"),
            Self::EntryNotFound { .. } => (StatusCode::NOT_FOUND, "Entry not found"),
            Self::Configuration { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Dataset store is not configured",
            ),
            Self::Retrieval { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load dataset"),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
