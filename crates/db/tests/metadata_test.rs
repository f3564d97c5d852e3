//! Integration tests for the blob metadata repository.

mod common;

use chrono::{Duration, Utc};
use drive_core::blob::{BlobMetadata, MetadataRepository};
use drive_db::MetadataStore;

fn metadata(id: &str, size: i64, storage_type: &str) -> BlobMetadata {
    BlobMetadata {
        id: id.to_string(),
        size,
        created_at: Utc::now(),
        storage_type: storage_type.to_string(),
        storage_path: format!("./storage_data/{id}"),
    }
}

#[tokio::test]
async fn test_metadata_save_and_find() {
    let fixture = common::test_db().await;
    let repo = MetadataStore::new(fixture.db.clone());

    let record = metadata("report.pdf", 42, "local");
    repo.save(&record).await.expect("save");

    let found = repo
        .find_by_id("report.pdf")
        .await
        .expect("find")
        .expect("record exists");

    assert_eq!(found.id, "report.pdf");
    assert_eq!(found.size, 42);
    assert_eq!(found.storage_type, "local");
    assert_eq!(found.storage_path, "./storage_data/report.pdf");
    assert_eq!(
        found.created_at.timestamp_millis(),
        record.created_at.timestamp_millis()
    );
}

#[tokio::test]
async fn test_metadata_find_missing_returns_none() {
    let fixture = common::test_db().await;
    let repo = MetadataStore::new(fixture.db.clone());

    let found = repo.find_by_id("nope").await.expect("find");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_metadata_save_upserts() {
    let fixture = common::test_db().await;
    let repo = MetadataStore::new(fixture.db.clone());

    let mut first = metadata("doc", 5, "local");
    first.created_at = Utc::now() - Duration::hours(1);
    repo.save(&first).await.expect("first save");

    let second = BlobMetadata {
        storage_path: "doc".to_string(),
        ..metadata("doc", 9, "s3")
    };
    repo.save(&second).await.expect("second save");

    let found = repo
        .find_by_id("doc")
        .await
        .expect("find")
        .expect("record exists");
    assert_eq!(found.size, 9);
    assert_eq!(found.storage_type, "s3");
    assert_eq!(found.storage_path, "doc");
    assert!(found.created_at > first.created_at);
}

#[tokio::test]
async fn test_metadata_ids_are_independent() {
    let fixture = common::test_db().await;
    let repo = MetadataStore::new(fixture.db.clone());

    repo.save(&metadata("a", 1, "database")).await.expect("save a");
    repo.save(&metadata("b", 2, "database")).await.expect("save b");

    let a = repo.find_by_id("a").await.expect("find").expect("a");
    let b = repo.find_by_id("b").await.expect("find").expect("b");
    assert_eq!(a.size, 1);
    assert_eq!(b.size, 2);
}
