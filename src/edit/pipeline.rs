//! Read–mutate–write pipeline.
//!
//! One logical operation with two failure domains. Rather than separate
//! completion channels for the read and write halves, a single result carries
//! a phase tag on failure, so callers can still branch on which half failed.

use std::path::Path;

use crate::storage::{self, Document, StoreError};

/// The phase of an edit operation in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// Failure before the mutation ran: the document never materialized.
    Read,
    /// Failure after the mutation ran: the result may not be on disk.
    Write,
}

/// An edit failure, tagged with the phase it occurred in.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// The read phase failed; the mutation was never invoked and the file
    /// was not touched.
    #[error("edit read phase failed: {0}")]
    Read(#[source] StoreError),

    /// The write phase failed; the mutated document was not (fully)
    /// persisted.
    #[error("edit write phase failed: {0}")]
    Write(#[source] StoreError),
}

impl EditError {
    /// Returns the phase in which the failure occurred.
    pub fn phase(&self) -> EditPhase {
        match self {
            Self::Read(_) => EditPhase::Read,
            Self::Write(_) => EditPhase::Write,
        }
    }

    /// Unwraps the underlying storage error.
    pub fn into_inner(self) -> StoreError {
        match self {
            Self::Read(e) | Self::Write(e) => e,
        }
    }
}

/// A successful edit: the document as written, and the exact bytes that
/// landed on disk.
#[derive(Debug)]
pub struct EditOutcome {
    /// The document after the mutation, as persisted.
    pub document: Document,
    /// The bytes written to the file.
    pub written: Vec<u8>,
}

/// Reads the document at `path`, applies `mutation`, and writes the result
/// back — one logical operation.
///
/// The mutation runs synchronously between the two I/O suspension points and
/// receives the exact value decoded from the read; it must not perform I/O of
/// its own. The pipeline does not branch on what the mutation did: once the
/// read succeeds, the writer is invoked exactly once with whatever document
/// the mutation returned.
///
/// Two overlapping `edit` calls on the same path are not ordered with respect
/// to each other; their read/write phases may interleave and the last writer
/// wins, discarding the earlier mutation. Callers that cannot tolerate lost
/// updates must serialize access themselves.
///
/// # Errors
///
/// - [`EditError::Read`] if the read fails ([`StoreError::Io`] or
///   [`StoreError::Decode`]); the mutation is never invoked.
/// - [`EditError::Write`] if the write fails ([`StoreError::Encode`] or
///   [`StoreError::Io`]).
pub async fn edit<F>(path: impl AsRef<Path>, mutation: F) -> Result<EditOutcome, EditError>
where
    F: FnOnce(Document) -> Document,
{
    let path = path.as_ref();

    let document = storage::read(path).await.map_err(EditError::Read)?;

    let document = mutation(document);

    let written = storage::write(path, &document)
        .await
        .map_err(EditError::Write)?;

    Ok(EditOutcome { document, written })
}
