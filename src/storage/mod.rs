//! Document storage subsystem for jsonstore
//!
//! A document is a single JSON value held in one file. The storage layer is
//! deliberately minimal: one read syscall to materialize a document, one
//! write syscall to replace it.
//!
//! # Design Principles
//!
//! - Full-document reads and writes (no partial or streaming access)
//! - Single attempt per operation (no retry, no fallback defaults)
//! - Every failure propagates to the caller as an explicit error
//! - No atomicity: an interrupted write may corrupt the file
//! - No locking: the file is the only shared resource and is unprotected

mod codec;
mod errors;
mod reader;
mod writer;

pub use codec::{decode, encode, Document};
pub use errors::{StoreError, StoreResult};
pub use reader::read;
pub use writer::write;
