//! Storage writer: encodes a document and persists it to a file.

use std::path::Path;

use tracing::{debug, warn};

use super::codec::{self, Document};
use super::errors::{StoreError, StoreResult};

/// Encodes `document` and writes the result to `path`, fully replacing any
/// existing content.
///
/// On success, returns the exact bytes written.
///
/// # Durability
///
/// The write is NOT atomic: if it is interrupted partway (crash, disk full),
/// the file may be left truncated or corrupted. Callers that need durability
/// must layer their own write-to-temp-then-rename on top.
///
/// # Errors
///
/// - [`StoreError::Encode`] if the document cannot be serialized; the file is
///   not touched in that case.
/// - [`StoreError::Io`] if the underlying write fails.
pub async fn write(path: impl AsRef<Path>, document: &Document) -> StoreResult<Vec<u8>> {
    let path = path.as_ref();

    // Encode before opening the file so an encode failure never truncates
    // existing content.
    let bytes = codec::encode(document)?;

    tokio::fs::write(path, &bytes).await.map_err(|e| {
        warn!(path = %path.display(), error = %e, "document write failed");
        StoreError::io(path, e)
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "document written");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn write_returns_exact_bytes_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        let doc = json!({"items": [1, 2, 3]});
        let written = write(&path, &doc).await.unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(written, on_disk);
        assert_eq!(on_disk, br#"{"items":[1,2,3]}"#);
    }

    #[tokio::test]
    async fn write_replaces_prior_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, r#"{"old": "much longer prior content here"}"#).unwrap();

        write(&path, &json!({"new": 1})).await.unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, br#"{"new":1}"#);
    }

    #[tokio::test]
    async fn write_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");

        let doc = json!({"b": 2, "a": [true, null], "c": "x"});
        write(&path, &doc).await.unwrap();
        let first = std::fs::read(&path).unwrap();

        write(&path, &doc).await.unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn write_to_invalid_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing_dir").join("db.json");

        let err = write(&path, &json!({})).await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
