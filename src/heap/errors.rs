//! Error types for heap commands
//!
//! The engine itself never fails loudly: an invalid insert returns `false` and
//! deleting from an empty heap returns `None` (plus an `error` step). The
//! command layer lifts those sentinels into [`HeapError`] so callers can use `?`.

use thiserror::Error;

/// Errors reported to the caller of a heap command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The value is missing, not a number, or not finite
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Delete, build or sort was requested on a heap with no elements
    #[error("Heap is empty!")]
    EmptyHeap,
}
