//! Integration tests for the table-backed storage backend.

mod common;

use drive_core::blob::Blob;
use drive_core::storage::{BlobStorage, StorageError};
use drive_db::{DatabaseStorage, connect};

#[tokio::test]
async fn test_database_storage_round_trip() {
    let fixture = common::test_db().await;
    let storage = DatabaseStorage::new(fixture.db.clone());

    let locator = storage
        .save(&Blob::new("doc", vec![0, 1, 2, 255]))
        .await
        .expect("save");
    assert_eq!(locator, "doc");

    let blob = storage.retrieve("doc").await.expect("retrieve");
    assert_eq!(blob.id, "doc");
    assert_eq!(blob.data, vec![0, 1, 2, 255]);
}

#[tokio::test]
async fn test_database_storage_overwrites() {
    let fixture = common::test_db().await;
    let storage = DatabaseStorage::new(fixture.db.clone());

    storage
        .save(&Blob::new("doc", b"first".to_vec()))
        .await
        .expect("first save");
    storage
        .save(&Blob::new("doc", b"second".to_vec()))
        .await
        .expect("second save");

    let blob = storage.retrieve("doc").await.expect("retrieve");
    assert_eq!(blob.data, b"second");
}

#[tokio::test]
async fn test_database_storage_missing_is_not_found() {
    let fixture = common::test_db().await;
    let storage = DatabaseStorage::new(fixture.db.clone());

    let err = storage.retrieve("missing").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { ref id } if id == "missing"));
}

#[tokio::test]
async fn test_database_storage_empty_payload() {
    let fixture = common::test_db().await;
    let storage = DatabaseStorage::new(fixture.db.clone());

    storage
        .save(&Blob::new("empty", Vec::new()))
        .await
        .expect("save");
    let blob = storage.retrieve("empty").await.expect("retrieve");
    assert!(blob.data.is_empty());
}

#[tokio::test]
async fn test_database_storage_survives_reconnect() {
    let fixture = common::test_db().await;
    DatabaseStorage::new(fixture.db.clone())
        .save(&Blob::new("kept", b"persistent".to_vec()))
        .await
        .expect("save");

    let db = connect(&fixture.config).await.expect("reconnect");
    let blob = DatabaseStorage::new(db)
        .retrieve("kept")
        .await
        .expect("retrieve");
    assert_eq!(blob.data, b"persistent");
}
