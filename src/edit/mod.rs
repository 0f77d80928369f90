//! Edit subsystem: the read–mutate–write pipeline and the array operations
//! built on top of it.

mod ops;
mod pipeline;

pub use ops::{append, remove, replace};
pub use pipeline::{edit, EditError, EditOutcome, EditPhase};
