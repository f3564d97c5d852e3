//! Bearer-token authentication middleware for `/v1` routes.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{AppState, error::ApiError};

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Compares two strings without short-circuiting on the first differing byte.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Authentication middleware that checks the static bearer token.
///
/// Rejects with 401 when the header is missing, is not `Bearer <token>`, or
/// carries a different token.
pub async fn bearer_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(header) = request.headers().get(AUTHORIZATION) else {
        return ApiError::unauthorized("Authorization header required").into_response();
    };

    let Some(token) = header.to_str().ok().and_then(extract_bearer_token) else {
        return ApiError::unauthorized("Invalid authorization format").into_response();
    };

    if !constant_time_eq(token, &state.bearer_token) {
        warn!(path = %request.uri().path(), "Rejected request with invalid token");
        return ApiError::unauthorized("Invalid token").into_response();
    }

    next.run(request).await
}
