//! Blob service error types.

use drive_shared::AppError;
use thiserror::Error;

use crate::storage::StorageError;

/// Metadata repository errors.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Database operation failed.
    #[error("metadata database error: {0}")]
    Database(String),
}

impl MetadataError {
    /// Create a database error.
    #[must_use]
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

/// Blob operation errors.
#[derive(Debug, Error)]
pub enum BlobError {
    /// Identifier rejected before reaching any backend.
    #[error("invalid blob id: {0}")]
    InvalidId(String),

    /// No metadata record for the identifier.
    #[error("blob not found: {0}")]
    NotFound(String),

    /// Storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Metadata repository failed.
    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),
}

impl BlobError {
    /// Create an invalid id error.
    #[must_use]
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

impl From<BlobError> for AppError {
    fn from(err: BlobError) -> Self {
        match err {
            BlobError::InvalidId(msg) => Self::Validation(format!("Invalid blob id: {msg}")),
            BlobError::NotFound(_) => Self::NotFound("Blob not found".to_string()),
            BlobError::Storage(e) => Self::Storage(e.to_string()),
            BlobError::Metadata(e) => Self::Database(e.to_string()),
        }
    }
}
