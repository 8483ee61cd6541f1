//! Integration tests for database initialization
//!
//! Covers first-run creation of the `Forms-data` database, reopening an
//! existing database, and persistence of submissions across reopen.

use fvs_common::db::{count_submissions, get_submission, init_database, insert_submission};
use serde_json::{json, Map, Value};
use tempfile::TempDir;

fn body(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object literal")
}

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("forms-data.db");

    let pool = init_database(&db_path).await;

    assert!(pool.is_ok(), "Database initialization failed: {:?}", pool.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_collection_starts_empty() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("forms-data.db")).await.unwrap();

    assert_eq!(count_submissions(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_reopen_preserves_submissions() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("forms-data.db");

    let pool = init_database(&db_path).await.unwrap();
    let id = insert_submission(
        &pool,
        body(json!({ "responderInfo": { "name": "Persisted" }, "ratings": {} })),
        fvs_common::time::now(),
    )
    .await
    .unwrap();
    pool.close().await;

    let reopened = init_database(&db_path).await.unwrap();
    assert_eq!(count_submissions(&reopened).await.unwrap(), 1);

    let stored = get_submission(&reopened, id).await.unwrap().expect("stored row");
    assert_eq!(stored.document["responderInfo"]["name"], "Persisted");
    assert!(stored.document["submittedAt"].is_string());
}
