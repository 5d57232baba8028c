//! Renderer state for replayed heap steps
//!
//! [`HeapView`] receives every visited [`AnimationStep`] and keeps what the
//! panes need to draw: the snapshot, which indices are highlighted (and
//! whether they are being swapped), which are sorted, the logical heap size,
//! the counters and the step message.

use crate::heap::{AnimationStep, Key, StepKind};
use crate::playback::StepRenderer;
use rustc_hash::FxHashSet;

/// How a single heap cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Default,
    Root,
    Comparing,
    Swapping,
    /// Placed in the sorted suffix, or outside the logical heap
    Sorted,
}

#[derive(Debug, Clone)]
pub struct HeapView {
    pub heap: Vec<Key>,
    /// `None` means the whole array is the heap
    pub heap_size: Option<usize>,
    pub highlighted: FxHashSet<usize>,
    pub swapping: bool,
    pub sorted: FxHashSet<usize>,
    pub comparisons: usize,
    pub swaps: usize,
    pub message: String,
    pub kind: Option<&'static str>,
    pub position: Option<usize>,
}

impl HeapView {
    pub fn new() -> Self {
        HeapView {
            heap: Vec::new(),
            heap_size: None,
            highlighted: FxHashSet::default(),
            swapping: false,
            sorted: FxHashSet::default(),
            comparisons: 0,
            swaps: 0,
            message: String::from("Ready"),
            kind: None,
            position: None,
        }
    }

    /// Number of leading elements currently drawn as the tree. A logical
    /// size of 0 (the last extract of a sort) draws the whole array.
    pub fn logical_size(&self) -> usize {
        let len = self.heap.len();
        match self.heap_size {
            Some(size) if size > 0 => size.min(len),
            _ => len,
        }
    }

    pub fn cell_state(&self, index: usize) -> CellState {
        if self.sorted.contains(&index) {
            CellState::Sorted
        } else if self.highlighted.contains(&index) {
            if self.swapping {
                CellState::Swapping
            } else {
                CellState::Comparing
            }
        } else if self.heap_size.is_some_and(|size| size > 0 && index >= size) {
            CellState::Sorted
        } else if index == 0 {
            CellState::Root
        } else {
            CellState::Default
        }
    }

    fn clear_highlights(&mut self) {
        self.highlighted.clear();
        self.sorted.clear();
        self.heap_size = None;
        self.swapping = false;
    }

    fn highlight(&mut self, indices: &[usize], swapping: bool) {
        self.highlighted = indices.iter().copied().collect();
        self.swapping = swapping;
    }

    fn mark_all_sorted(&mut self) {
        self.sorted = (0..self.heap.len()).collect();
    }
}

impl Default for HeapView {
    fn default() -> Self {
        Self::new()
    }
}

impl StepRenderer for HeapView {
    fn render(&mut self, position: usize, step: &AnimationStep) {
        self.heap = step.heap.clone();

        match &step.kind {
            StepKind::Insert { .. }
            | StepKind::Delete { .. }
            | StepKind::HeapifyComplete
            | StepKind::BuildComplete => {
                self.clear_highlights();
            }
            StepKind::Compare => {
                self.highlight(&step.indices, false);
                self.heap_size = Some(step.heap_size);
            }
            StepKind::Swap => {
                self.highlight(&step.indices, true);
                self.heap_size = Some(step.heap_size);
            }
            StepKind::Heapify { index } => {
                self.highlight(&[*index], false);
                self.heap_size = None;
            }
            StepKind::Extract { sorted, .. } => {
                self.clear_highlights();
                self.heap_size = Some(step.heap_size);
                let len = self.heap.len();
                self.sorted = (0..sorted.len()).map(|i| len - 1 - i).collect();
            }
            StepKind::SortComplete { .. } => {
                self.clear_highlights();
                self.mark_all_sorted();
            }
            StepKind::BuildStart | StepKind::SortStart | StepKind::Error => {}
        }

        self.comparisons = step.comparisons;
        self.swaps = step.swaps;
        self.message = step.message.clone();
        self.kind = Some(step.kind.tag());
        self.position = Some(position);
    }

    fn finish(&mut self, mark_all_sorted: bool) {
        self.clear_highlights();
        if mark_all_sorted {
            self.mark_all_sorted();
        }
    }

    fn clear(&mut self) {
        *self = HeapView::new();
    }
}
