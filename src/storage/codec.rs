//! Codec between in-memory documents and on-disk JSON text.
//!
//! The document type is `serde_json::Value`: a tagged union over string,
//! number, bool, null, array, and object, so decoded content can be handled
//! with compile-time exhaustiveness instead of dynamic typing.

use serde_json::Value;

use super::errors::{StoreError, StoreResult};

/// The in-memory decoded JSON value manipulated by an edit operation.
///
/// Materialized fresh on each read and discarded after the owning operation
/// completes; there is no caching and no identity across operations.
pub type Document = Value;

/// Serializes a document to its textual JSON form (UTF-8 bytes).
///
/// Object keys serialize in sorted order; round-tripping preserves structure,
/// not key byte order.
pub fn encode(document: &Document) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(document).map_err(StoreError::encode)
}

/// Parses textual JSON into a document.
pub fn decode(bytes: &[u8]) -> StoreResult<Document> {
    serde_json::from_slice(bytes).map_err(StoreError::decode)
}
