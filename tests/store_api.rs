//! End-to-end tests against the public jsonstore API.
//!
//! These exercise the full read–mutate–write pipeline through the crate
//! boundary, the way an integrating application would.

use serde_json::json;
use tempfile::TempDir;

use jsonstore::{EditError, EditPhase, StoreError};

fn fixture(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[tokio::test]
async fn write_then_read_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");

    let doc = json!({
        "recipes": [{"label": "pasta"}, {"label": "soup"}],
        "version": 3
    });

    let written = jsonstore::write(&path, &doc).await.unwrap();
    let loaded = jsonstore::read(&path).await.unwrap();

    assert_eq!(loaded, doc);
    assert_eq!(written, std::fs::read(&path).unwrap());
}

#[tokio::test]
async fn edit_transforms_document_on_disk() {
    let (_dir, path) = fixture(r#"{"visits":10}"#);

    let outcome = jsonstore::edit(&path, |mut doc| {
        doc["visits"] = json!(11);
        doc["last"] = json!("today");
        doc
    })
    .await
    .unwrap();

    assert_eq!(outcome.document["visits"], json!(11));

    let loaded = jsonstore::read(&path).await.unwrap();
    assert_eq!(loaded, json!({"visits": 11, "last": "today"}));
}

#[tokio::test]
async fn append_grows_array_through_repeated_calls() {
    let (_dir, path) = fixture(r#"{"items":[]}"#);

    jsonstore::append(&path, "items", json!(1)).await.unwrap();
    jsonstore::append(&path, "items", json!(2)).await.unwrap();
    let written = jsonstore::append(&path, "items", json!(3)).await.unwrap();

    assert_eq!(written, br#"{"items":[1,2,3]}"#);
}

#[tokio::test]
async fn append_then_remove_then_replace() {
    let (_dir, path) = fixture(r#"{"items":[1,2,3]}"#);

    jsonstore::append(&path, "items", json!(5)).await.unwrap();
    jsonstore::remove(&path, "items", 0).await.unwrap();
    jsonstore::replace(&path, "items", 1, json!("three")).await.unwrap();

    let loaded = jsonstore::read(&path).await.unwrap();
    assert_eq!(loaded, json!({"items": [2, "three", 5]}));
}

#[tokio::test]
async fn read_errors_carry_their_kind() {
    let dir = TempDir::new().unwrap();

    let err = jsonstore::read(dir.path().join("absent.json")).await.unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));

    let (_dir2, bad) = fixture("{not json");
    let err = jsonstore::read(&bad).await.unwrap_err();
    assert!(matches!(err, StoreError::Decode { .. }));
}

#[tokio::test]
async fn edit_on_unreadable_path_never_touches_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = jsonstore::edit(&path, |doc| doc).await.unwrap_err();

    assert_eq!(err.phase(), EditPhase::Read);
    assert!(!path.exists());
}

#[tokio::test]
async fn append_missing_key_rewrites_unchanged_content() {
    let (_dir, path) = fixture(r#"{"items":[1,2,3]}"#);

    let err = jsonstore::append(&path, "missing", json!(5)).await.unwrap_err();

    assert!(matches!(
        err,
        EditError::Read(StoreError::KeyNotFound(ref k)) if k == "missing"
    ));
    assert_eq!(std::fs::read(&path).unwrap(), br#"{"items":[1,2,3]}"#);
}

#[tokio::test]
async fn sequential_edits_do_not_lose_updates() {
    // Overlapping edits on one path may race (last writer wins); awaiting
    // each call before issuing the next is the caller-side serialization
    // that makes updates cumulative.
    let (_dir, path) = fixture(r#"{"log":[]}"#);

    for i in 0..5 {
        jsonstore::append(&path, "log", json!(i)).await.unwrap();
    }

    let loaded = jsonstore::read(&path).await.unwrap();
    assert_eq!(loaded, json!({"log": [0, 1, 2, 3, 4]}));
}
