//! Blob metadata repository for database operations.
//!
//! Implements the metadata upsert and lookup using `SeaORM`.

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::entities::blob_metadata;
use drive_core::blob::{BlobMetadata, MetadataError, MetadataRepository};

/// Blob metadata repository implementation.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    db: DatabaseConnection,
}

impl MetadataStore {
    /// Create a new metadata repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MetadataRepository for MetadataStore {
    async fn save(&self, metadata: &BlobMetadata) -> Result<(), MetadataError> {
        let active_model = blob_metadata::ActiveModel {
            id: Set(metadata.id.clone()),
            size: Set(metadata.size),
            created_at: Set(metadata.created_at.into()),
            storage_type: Set(metadata.storage_type.clone()),
            storage_path: Set(metadata.storage_path.clone()),
        };

        blob_metadata::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(blob_metadata::Column::Id)
                    .update_columns([
                        blob_metadata::Column::Size,
                        blob_metadata::Column::CreatedAt,
                        blob_metadata::Column::StorageType,
                        blob_metadata::Column::StoragePath,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| MetadataError::database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlobMetadata>, MetadataError> {
        let model = blob_metadata::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| MetadataError::database(e.to_string()))?;

        Ok(model.map(to_domain))
    }
}

/// Convert database model to domain metadata.
fn to_domain(model: blob_metadata::Model) -> BlobMetadata {
    BlobMetadata {
        id: model.id,
        size: model.size,
        created_at: model.created_at.with_timezone(&Utc),
        storage_type: model.storage_type,
        storage_path: model.storage_path,
    }
}
