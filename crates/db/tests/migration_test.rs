//! Integration tests for schema migrations.

mod common;

use drive_db::migrate;
use sea_orm::{ConnectionTrait, Statement};

#[tokio::test]
async fn test_migrations_create_blob_tables() {
    let fixture = common::test_db().await;
    let backend = fixture.db.get_database_backend();

    for table in ["blob_metadata", "blob_storage"] {
        let row = fixture
            .db
            .query_one(Statement::from_sql_and_values(
                backend,
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?",
                [table.into()],
            ))
            .await
            .expect("query sqlite_master");
        assert!(row.is_some(), "{table} should exist");
    }
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let fixture = common::test_db().await;
    migrate(&fixture.db).await.expect("second migrate run");
}
