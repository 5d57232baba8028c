//! Max-heap engine with step recording
//!
//! This module holds the algorithmic core of the visualizer:
//! - [`engine`]: [`HeapEngine`], which runs insert, extract-max, build-heap and
//!   heap-sort while recording every comparison and swap
//! - [`step`]: the immutable [`AnimationStep`] records that make up a trace
//! - [`errors`]: [`HeapError`], returned by the command layer
//! - [`parse`]: text-to-key parsing for user input
//!
//! # Index Layout
//!
//! The heap is stored as a 0-indexed array:
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! ```

pub mod engine;
pub mod errors;
pub mod parse;
pub mod step;

pub use engine::{HeapEngine, Stats};
pub use errors::HeapError;
pub use step::{AnimationStep, StepKind, Trace};

/// Heap keys. Only finite values are accepted.
pub type Key = f64;

/// Index of the parent of `index` (`index` must be non-zero)
pub fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Index of the left child of `index`
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index`
pub fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Check the max-heap property over the first `size` elements
pub fn is_max_heap(values: &[Key], size: usize) -> bool {
    let size = size.min(values.len());
    (1..size).all(|i| values[parent(i)] >= values[i])
}
