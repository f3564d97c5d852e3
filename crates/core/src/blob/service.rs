//! Blob service implementation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use super::error::{BlobError, MetadataError};
use super::types::{Blob, BlobMetadata};
use crate::storage::BlobStorage;

/// Longest accepted identifier, in bytes.
pub const MAX_ID_LEN: usize = 1024;

/// Repository trait for blob metadata persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait MetadataRepository: Send + Sync {
    /// Insert or replace the record keyed by `metadata.id`.
    fn save(
        &self,
        metadata: &BlobMetadata,
    ) -> impl std::future::Future<Output = Result<(), MetadataError>> + Send;

    /// Find the record for an identifier.
    fn find_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<BlobMetadata>, MetadataError>> + Send;
}

/// Check that an identifier is safe to hand to every backend.
///
/// # Errors
///
/// Returns `BlobError::InvalidId` if the identifier is empty, is `.` or `..`,
/// contains `/`, `\` or NUL, or is longer than [`MAX_ID_LEN`] bytes.
pub fn validate_id(id: &str) -> Result<(), BlobError> {
    if id.is_empty() {
        return Err(BlobError::invalid_id("must not be empty"));
    }
    if id == "." || id == ".." {
        return Err(BlobError::invalid_id("must not be a relative path component"));
    }
    if id.len() > MAX_ID_LEN {
        return Err(BlobError::invalid_id(format!(
            "must be at most {MAX_ID_LEN} bytes"
        )));
    }
    if let Some(c) = id.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(BlobError::invalid_id(format!(
            "must not contain '{}'",
            c.escape_default()
        )));
    }
    Ok(())
}

/// Blob service pairing a storage backend with the metadata repository.
pub struct BlobService<S: BlobStorage, M: MetadataRepository> {
    storage: Arc<S>,
    metadata: Arc<M>,
    storage_type: String,
}

impl<S: BlobStorage, M: MetadataRepository> BlobService<S, M> {
    /// Create a new blob service.
    ///
    /// `storage_type` is the tag recorded in every metadata record.
    #[must_use]
    pub fn new(storage: Arc<S>, metadata: Arc<M>, storage_type: impl Into<String>) -> Self {
        Self {
            storage,
            metadata,
            storage_type: storage_type.into(),
        }
    }

    /// Backend type tag.
    #[must_use]
    pub fn storage_type(&self) -> &str {
        &self.storage_type
    }

    /// Store a payload and record its metadata.
    ///
    /// The payload is saved first; metadata is only written after the backend
    /// reports success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The identifier is invalid
    /// - The storage backend fails
    /// - The metadata write fails (the payload stays in the backend)
    pub async fn create(&self, id: &str, data: Vec<u8>) -> Result<BlobMetadata, BlobError> {
        validate_id(id)?;

        let blob = Blob::new(id, data);
        let storage_path = self.storage.save(&blob).await.map_err(|e| {
            error!(blob_id = %id, backend = %self.storage_type, error = %e, "Failed to save blob");
            e
        })?;

        let metadata = BlobMetadata {
            id: blob.id,
            size: i64::try_from(blob.data.len()).unwrap_or(i64::MAX),
            created_at: Utc::now(),
            storage_type: self.storage_type.clone(),
            storage_path,
        };

        self.metadata.save(&metadata).await.map_err(|e| {
            error!(blob_id = %id, error = %e, "Failed to save blob metadata");
            e
        })?;

        info!(
            blob_id = %metadata.id,
            size = metadata.size,
            backend = %metadata.storage_type,
            "Blob stored"
        );

        Ok(metadata)
    }

    /// Fetch a payload together with its metadata.
    ///
    /// # Errors
    ///
    /// Returns `BlobError::NotFound` if no metadata exists for the identifier,
    /// or the repository or backend error otherwise.
    pub async fn get(&self, id: &str) -> Result<(Blob, BlobMetadata), BlobError> {
        let metadata = self
            .metadata
            .find_by_id(id)
            .await?
            .ok_or_else(|| BlobError::NotFound(id.to_string()))?;

        let blob = self.storage.retrieve(id).await.map_err(|e| {
            error!(blob_id = %id, backend = %self.storage_type, error = %e, "Failed to retrieve blob");
            e
        })?;

        info!(blob_id = %id, size = blob.size(), "Blob retrieved");

        Ok((blob, metadata))
    }
}
