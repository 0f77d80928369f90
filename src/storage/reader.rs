//! Storage reader: loads a file and decodes it into a document.

use std::path::Path;

use tracing::warn;

use super::codec::{self, Document};
use super::errors::{StoreError, StoreResult};

/// Loads the full byte contents of the file at `path` and decodes them as a
/// JSON document.
///
/// A single read attempt is made; there is no retry and no fallback default
/// document on failure.
///
/// # Errors
///
/// - [`StoreError::Io`] if the file cannot be opened or read (not found,
///   permission denied, ...), wrapping the underlying OS error.
/// - [`StoreError::Decode`] if the contents are not well-formed JSON.
pub async fn read(path: impl AsRef<Path>) -> StoreResult<Document> {
    let path = path.as_ref();

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        warn!(path = %path.display(), error = %e, "document read failed");
        StoreError::io(path, e)
    })?;

    codec::decode(&bytes).map_err(|e| {
        warn!(path = %path.display(), error = %e, "document decode failed");
        e
    })
}
