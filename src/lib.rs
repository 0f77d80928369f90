//! jsonstore - a minimal JSON document file store
//!
//! Reads a JSON file into memory as a [`Document`], lets the caller
//! transform it, and persists the result back to disk. The core is the
//! read–mutate–write [`edit`] pipeline; [`append`], [`remove`], and
//! [`replace`] are array operations built on it.
//!
//! Writes are full-file replacements with no atomicity guarantee, and no
//! locking arbitrates concurrent callers on the same file: overlapping edits
//! may lose updates (last writer wins). See [`edit`] for details.
//!
//! ```no_run
//! use serde_json::json;
//!
//! # async fn demo() -> Result<(), jsonstore::EditError> {
//! let written = jsonstore::append("db.json", "items", json!(5)).await?;
//! assert!(written.ends_with(b"}"));
//! # Ok(())
//! # }
//! ```

pub mod edit;
pub mod storage;

pub use edit::{append, edit, remove, replace, EditError, EditOutcome, EditPhase};
pub use storage::{read, write, Document, StoreError, StoreResult};
