//! Array operations built on the edit pipeline.
//!
//! Each operation targets the array stored under a named key of the document
//! and runs as an ordinary pipeline mutation. Precondition checks (key
//! present, value is an array, index in bounds) happen inside the mutation
//! step, after the read has already succeeded — so per the pipeline contract
//! a precondition failure does NOT suppress the write: the file is rewritten
//! with its unchanged, re-encoded contents. Precondition failures are
//! reported with the read-phase tag and take priority over a write failure
//! from that rewrite.

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use super::pipeline::{edit, EditError};
use crate::storage::{Document, StoreError};

/// Appends `value` to the end of the array under `key` in the document at
/// `path`, preserving the order of prior elements.
///
/// No uniqueness or type checking is applied to `value`.
///
/// On success, returns the bytes written to the file.
///
/// # Errors
///
/// - [`EditError::Read`] wrapping [`StoreError::Io`] / [`StoreError::Decode`]
///   if the document cannot be loaded.
/// - [`EditError::Read`] wrapping [`StoreError::KeyNotFound`] or
///   [`StoreError::NotAnArray`] if the precondition fails. The file has
///   still been rewritten with unchanged contents by the time this returns.
/// - [`EditError::Write`] if re-encoding or the write itself fails and no
///   precondition failure preceded it.
pub async fn append(
    path: impl AsRef<Path>,
    key: &str,
    value: Value,
) -> Result<Vec<u8>, EditError> {
    mutate_array(path, key, |items| {
        items.push(value);
        Ok(())
    })
    .await
}

/// Removes the element at `index` from the array under `key`, shifting later
/// elements down and preserving their order.
///
/// Shares [`append`]'s error and rewrite-on-precondition-failure behavior,
/// plus [`StoreError::IndexOutOfBounds`] when `index >= len`.
pub async fn remove(
    path: impl AsRef<Path>,
    key: &str,
    index: usize,
) -> Result<Vec<u8>, EditError> {
    mutate_array(path, key, |items| {
        if index >= items.len() {
            return Err(out_of_bounds(key, index, items.len()));
        }
        items.remove(index);
        Ok(())
    })
    .await
}

/// Overwrites the element at `index` in the array under `key` with `value`.
///
/// Shares [`append`]'s error and rewrite-on-precondition-failure behavior,
/// plus [`StoreError::IndexOutOfBounds`] when `index >= len`.
pub async fn replace(
    path: impl AsRef<Path>,
    key: &str,
    index: usize,
    value: Value,
) -> Result<Vec<u8>, EditError> {
    mutate_array(path, key, |items| {
        if index >= items.len() {
            return Err(out_of_bounds(key, index, items.len()));
        }
        items[index] = value;
        Ok(())
    })
    .await
}

fn out_of_bounds(key: &str, index: usize, len: usize) -> StoreError {
    StoreError::IndexOutOfBounds {
        key: key.to_string(),
        index,
        len,
    }
}

/// Runs `op` against the array under `key` as an edit-pipeline mutation.
///
/// A precondition failure inside the mutation leaves the document unchanged
/// but is only reported after the pipeline has finished, because the write
/// still runs. If both the precondition and the write fail, the precondition
/// error wins: it was the first failure signaled.
async fn mutate_array<F>(path: impl AsRef<Path>, key: &str, op: F) -> Result<Vec<u8>, EditError>
where
    F: FnOnce(&mut Vec<Value>) -> Result<(), StoreError>,
{
    let path = path.as_ref();
    let mut precondition: Option<StoreError> = None;

    let result = edit(path, |mut doc: Document| {
        match doc.get_mut(key) {
            Some(Value::Array(items)) => {
                if let Err(e) = op(items) {
                    precondition = Some(e);
                }
            }
            Some(_) => precondition = Some(StoreError::NotAnArray(key.to_string())),
            None => precondition = Some(StoreError::key_not_found(key)),
        }
        doc
    })
    .await;

    if let Some(err) = precondition {
        warn!(path = %path.display(), key, error = %err, "array operation precondition failed");
        return Err(EditError::Read(err));
    }

    Ok(result?.written)
}
