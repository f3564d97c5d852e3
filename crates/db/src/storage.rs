//! Table-backed storage backend.

use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use tracing::debug;

use crate::entities::blob_storage;
use drive_core::blob::Blob;
use drive_core::storage::{BlobStorage, StorageError};

/// Stores each blob as one row of the `blob_storage` table.
///
/// The locator is the identifier itself.
#[derive(Debug, Clone)]
pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    /// Create storage over an existing connection.
    ///
    /// The table is created by migrations, not here.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BlobStorage for DatabaseStorage {
    async fn save(&self, blob: &Blob) -> Result<String, StorageError> {
        let active_model = blob_storage::ActiveModel {
            id: Set(blob.id.clone()),
            data: Set(blob.data.clone()),
        };

        blob_storage::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(blob_storage::Column::Id)
                    .update_column(blob_storage::Column::Data)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| StorageError::database(e.to_string()))?;

        debug!(blob_id = %blob.id, size = blob.size(), "Blob row upserted");
        Ok(blob.id.clone())
    }

    async fn retrieve(&self, id: &str) -> Result<Blob, StorageError> {
        let model = blob_storage::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| StorageError::database(e.to_string()))?
            .ok_or_else(|| StorageError::not_found(id))?;

        Ok(Blob::new(model.id, model.data))
    }
}
