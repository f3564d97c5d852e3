//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use drive_core::blob::BlobError;
use drive_shared::AppError;
use serde_json::json;
use tracing::error;

/// An [`AppError`] rendered as `{"error": message}` with its status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: AppError,
}

impl ApiError {
    /// Wrap an application error, taking the status from it.
    #[must_use]
    pub fn new(error: AppError) -> Self {
        let status = StatusCode::from_u16(error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self { status, error }
    }

    /// 401 with the given message.
    #[must_use]
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(AppError::Unauthorized(msg.into()))
    }

    /// 400 with the given message.
    #[must_use]
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(AppError::Validation(msg.into()))
    }

    /// Failure while storing a blob.
    #[must_use]
    pub fn from_create(err: BlobError) -> Self {
        match err {
            BlobError::Storage(e) => {
                Self::new(AppError::Storage(format!("Failed to save blob: {e}")))
            }
            BlobError::Metadata(e) => {
                Self::new(AppError::Database(format!("Failed to save metadata: {e}")))
            }
            other => Self::new(other.into()),
        }
    }

    /// Failure while fetching a blob.
    #[must_use]
    pub fn from_get(err: BlobError) -> Self {
        match err {
            BlobError::Storage(e) => {
                Self::new(AppError::Storage(format!("Failed to retrieve blob: {e}")))
            }
            BlobError::Metadata(e) => Self::new(AppError::Database(format!(
                "Failed to retrieve metadata: {e}"
            ))),
            other => Self::new(other.into()),
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Message placed in the `error` field.
    #[must_use]
    pub fn message(&self) -> &str {
        self.error.message()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = format!("Invalid request: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                error: AppError::Validation(message),
            };
        }
        Self::bad_request(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(
                code = self.error.error_code(),
                error = %self.error.message(),
                "Request failed"
            );
        }

        (self.status, Json(json!({ "error": self.error.message() }))).into_response()
    }
}
