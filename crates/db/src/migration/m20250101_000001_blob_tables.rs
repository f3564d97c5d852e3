//! Blob tables migration.
//!
//! Creates `blob_metadata` and `blob_storage`. Built with the schema builder
//! so the same migration runs on SQLite and PostgreSQL.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlobMetadata::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlobMetadata::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlobMetadata::Size).big_integer().not_null())
                    .col(
                        ColumnDef::new(BlobMetadata::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlobMetadata::StorageType).text().not_null())
                    .col(ColumnDef::new(BlobMetadata::StoragePath).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlobStorage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlobStorage::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlobStorage::Data).blob().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlobStorage::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlobMetadata::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlobMetadata {
    Table,
    Id,
    Size,
    CreatedAt,
    StorageType,
    StoragePath,
}

#[derive(DeriveIden)]
enum BlobStorage {
    Table,
    Id,
    Data,
}
