//! Storage error types.
//!
//! Every failure is surfaced to the immediate caller as an explicit error
//! value. Nothing is swallowed, nothing is retried, and no default document
//! is ever substituted for a failed read.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage and array-operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be opened, read, or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the file the operation targeted
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file contents are not well-formed JSON.
    #[error("malformed JSON document: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized to JSON text.
    #[error("document cannot be encoded as JSON: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// An array operation targeted a key absent from the document.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// An array operation targeted a key whose value is not an array.
    #[error("value under key {0:?} is not an array")]
    NotAnArray(String),

    /// An array operation targeted an index past the end of the array.
    #[error("index {index} out of bounds for array under key {key:?} (len {len})")]
    IndexOutOfBounds {
        /// Key whose array was indexed
        key: String,
        /// Requested index
        index: usize,
        /// Length of the array at the time of the operation
        len: usize,
    },
}

impl StoreError {
    /// Create an I/O error carrying the offending path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a decode error from a serde_json parse failure.
    pub fn decode(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }

    /// Create an encode error from a serde_json serialize failure.
    pub fn encode(source: serde_json::Error) -> Self {
        Self::Encode { source }
    }

    /// Create a key-not-found error.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound(key.into())
    }

    /// Returns whether this error is an array-operation precondition failure
    /// rather than a storage failure.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::KeyNotFound(_) | Self::NotAnArray(_) | Self::IndexOutOfBounds { .. }
        )
    }
}
