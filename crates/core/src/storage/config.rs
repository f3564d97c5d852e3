//! Storage provider configuration types.

use std::path::PathBuf;

use drive_shared::StorageSettings;
use serde::{Deserialize, Serialize};

use super::error::StorageError;

/// Storage provider configuration.
///
/// Chosen once at process start; the matching backend is then held for the
/// lifetime of the process.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// S3-compatible storage: MinIO, AWS S3, Cloudflare R2
    S3 {
        /// S3 endpoint URL.
        endpoint: String,
        /// S3 bucket name.
        bucket: String,
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Signing region.
        region: String,
    },
    /// Rows in the `blob_storage` table of the configured database
    Database,
    /// Local filesystem
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl StorageProvider {
    /// Create S3-compatible provider.
    #[must_use]
    pub fn s3(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Create local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Build the provider selected by `settings.backend`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Configuration` for an unknown backend name.
    pub fn from_settings(settings: &StorageSettings) -> Result<Self, StorageError> {
        match settings.backend.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::local_fs(&settings.local_path)),
            "database" => Ok(Self::Database),
            "s3" => Ok(Self::s3(
                &settings.s3.endpoint,
                &settings.s3.bucket,
                &settings.s3.access_key,
                &settings.s3.secret_key,
                &settings.s3.region,
            )),
            other => Err(StorageError::configuration(format!(
                "unknown storage backend: {other}"
            ))),
        }
    }

    /// Get the backend type tag recorded in blob metadata.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::Database => "database",
            Self::LocalFs { .. } => "local",
        }
    }
}

impl std::fmt::Debug for StorageProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::S3 {
                endpoint,
                bucket,
                region,
                ..
            } => f
                .debug_struct("S3")
                .field("endpoint", endpoint)
                .field("bucket", bucket)
                .field("region", region)
                .finish_non_exhaustive(),
            Self::Database => f.write_str("Database"),
            Self::LocalFs { root } => f.debug_struct("LocalFs").field("root", root).finish(),
        }
    }
}
