//! Local filesystem storage backend.

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use super::{BlobStorage, StorageError};
use crate::blob::Blob;

/// Stores each blob as the file `{root}/{id}`.
///
/// The identifier is used verbatim as a path segment. Callers validate it
/// first (see `BlobService::validate_id`).
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create storage at the given root directory.
    ///
    /// Creates the directory, recursively, if it doesn't exist.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }
}

impl BlobStorage for LocalStorage {
    async fn save(&self, blob: &Blob) -> Result<String, StorageError> {
        let path = self.blob_path(&blob.id);

        // Write beside the target and rename so readers never see a torn file.
        let staging = self
            .root
            .join(format!(".{}.tmp", Uuid::new_v4().simple()));
        if let Err(err) = fs::write(&staging, &blob.data).await {
            let _ = fs::remove_file(&staging).await;
            return Err(err.into());
        }
        if let Err(err) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(err.into());
        }

        Ok(path.to_string_lossy().into_owned())
    }

    async fn retrieve(&self, id: &str) -> Result<Blob, StorageError> {
        match fs::read(self.blob_path(id)).await {
            Ok(data) => Ok(Blob::new(id, data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::not_found(id)),
            Err(e) => Err(e.into()),
        }
    }
}
