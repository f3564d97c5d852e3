//! Shared fixtures for database integration tests.

#![allow(dead_code)]

use drive_db::{connect, migrate};
use drive_shared::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// A migrated SQLite database living in a temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct TestDb {
    pub db: DatabaseConnection,
    pub config: DatabaseConfig,
    _dir: TempDir,
}

/// Connect to a fresh SQLite file and run migrations.
pub async fn test_db() -> TestDb {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display()),
        max_connections: 1,
        min_connections: 1,
    };
    let db = connect(&config)
        .await
        .expect("Failed to connect to database");
    migrate(&db).await.expect("Failed to run migrations");

    TestDb {
        db,
        config,
        _dir: dir,
    }
}
