//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::bearer_auth};

pub mod blobs;
pub mod health;

/// Creates the `/v1` router; every route behind it requires the bearer token.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(blobs::routes())
        .layer(middleware::from_fn_with_state(state, bearer_auth))
}
