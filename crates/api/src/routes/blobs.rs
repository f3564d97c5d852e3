//! Blob upload and retrieval routes.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

/// Creates the blob routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/blobs", post(create_blob))
        .route("/blobs/{id}", get(get_blob))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for storing a blob.
#[derive(Debug, Deserialize)]
pub struct CreateBlobRequest {
    /// Caller-chosen identifier.
    pub id: String,
    /// Payload, standard base64 with padding.
    pub data: String,
}

/// Response for a stored blob.
#[derive(Debug, Serialize)]
pub struct CreateBlobResponse {
    /// Identifier the blob was stored under.
    pub id: String,
    /// Confirmation message.
    pub message: &'static str,
}

/// Response for a fetched blob.
#[derive(Debug, Serialize)]
pub struct BlobResponse {
    /// Blob identifier.
    pub id: String,
    /// Payload, standard base64 with padding.
    pub data: String,
    /// Payload length in bytes, as a decimal string.
    pub size: String,
    /// When the blob was stored (RFC 3339, UTC, whole seconds).
    pub created_at: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/v1/blobs`
/// Decode the payload and store it under the requested identifier.
async fn create_blob(
    State(state): State<AppState>,
    payload: Result<Json<CreateBlobRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    if request.data.is_empty() {
        return Err(ApiError::bad_request("Invalid request: data is required"));
    }

    let data = BASE64
        .decode(request.data.as_bytes())
        .map_err(|_| ApiError::bad_request("Invalid base64 data"))?;

    let metadata = state
        .blobs
        .create(&request.id, data)
        .await
        .map_err(ApiError::from_create)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBlobResponse {
            id: metadata.id,
            message: "Blob created successfully",
        }),
    ))
}

/// GET `/v1/blobs/{id}`
/// Fetch a stored blob with its metadata.
async fn get_blob(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlobResponse>, ApiError> {
    let (blob, metadata) = state.blobs.get(&id).await.map_err(ApiError::from_get)?;

    Ok(Json(BlobResponse {
        id: blob.id,
        data: BASE64.encode(&blob.data),
        size: metadata.size.to_string(),
        created_at: metadata
            .created_at
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}
