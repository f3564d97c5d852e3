//! Storage backend selected at process start.

use drive_core::blob::Blob;
use drive_core::storage::{
    BlobStorage, LocalStorage, S3Storage, StorageError, StorageProvider,
};
use drive_db::DatabaseStorage;
use sea_orm::DatabaseConnection;
use tracing::info;

/// One of the three storage backends.
///
/// Holds the concrete backend by value and forwards every call to it.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Files under a root directory.
    Local(LocalStorage),
    /// Rows in the `blob_storage` table.
    Database(DatabaseStorage),
    /// Objects in an S3-compatible bucket.
    S3(S3Storage),
}

impl StorageBackend {
    /// Build the backend a provider describes.
    ///
    /// The database backend shares `db` with the metadata store. The S3
    /// backend provisions its bucket before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be created, the S3
    /// endpoint is invalid, or bucket provisioning fails.
    pub async fn from_provider(
        provider: &StorageProvider,
        db: &DatabaseConnection,
    ) -> Result<Self, StorageError> {
        let backend = match provider {
            StorageProvider::LocalFs { root } => Self::Local(LocalStorage::new(root).await?),
            StorageProvider::Database => Self::Database(DatabaseStorage::new(db.clone())),
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => Self::S3(
                S3Storage::connect(endpoint, bucket, access_key_id, secret_access_key, region)
                    .await?,
            ),
        };

        info!(backend = backend.name(), "Storage backend ready");
        Ok(backend)
    }

    /// Backend type tag recorded in blob metadata.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Database(_) => "database",
            Self::S3(_) => "s3",
        }
    }
}

impl BlobStorage for StorageBackend {
    async fn save(&self, blob: &Blob) -> Result<String, StorageError> {
        match self {
            Self::Local(storage) => storage.save(blob).await,
            Self::Database(storage) => storage.save(blob).await,
            Self::S3(storage) => storage.save(blob).await,
        }
    }

    async fn retrieve(&self, id: &str) -> Result<Blob, StorageError> {
        match self {
            Self::Local(storage) => storage.retrieve(id).await,
            Self::Database(storage) => storage.retrieve(id).await,
            Self::S3(storage) => storage.retrieve(id).await,
        }
    }
}
