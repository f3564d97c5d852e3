//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for blob upload and retrieval
//! - Bearer-token authentication middleware
//! - The storage backend selected at startup
//! - Error responses

pub mod backend;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use drive_core::blob::BlobService;
use drive_db::MetadataStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use backend::StorageBackend;
pub use error::ApiError;

/// Blob service as wired by the server.
pub type Blobs = BlobService<StorageBackend, MetadataStore>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Blob service over the selected backend and the metadata store.
    pub blobs: Arc<Blobs>,
    /// Token every `/v1` request must present.
    pub bearer_token: Arc<str>,
    /// Largest accepted request body, in bytes.
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create application state.
    #[must_use]
    pub fn new(blobs: Blobs, bearer_token: impl Into<Arc<str>>, max_body_bytes: usize) -> Self {
        Self {
            blobs: Arc::new(blobs),
            bearer_token: bearer_token.into(),
            max_body_bytes,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/v1", routes::api_routes_with_state(state.clone()))
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
