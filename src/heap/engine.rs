//! Max-heap engine that records every step of its algorithms
//!
//! Each public operation runs to completion synchronously and leaves behind a
//! fresh [`Trace`]: the ordered list of [`AnimationStep`]s describing every
//! comparison, swap and structural change it made. Counters and trace belong
//! to a single operation and are reset when the next one starts.
//!
//! Sift-down breaks ties in favour of the current index: a child only takes
//! over when it is strictly greater. Traces depend on this, so two runs over
//! the same input always produce the same steps.

use super::step::{now_millis, AnimationStep, StepKind, Trace};
use super::{left_child, parent, right_child, Key};
use serde::Serialize;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, warn};

/// Summary of the engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub size: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub steps: usize,
}

/// Binary max-heap with comparison/swap counters and a step trace
#[derive(Debug, Default)]
pub struct HeapEngine {
    heap: Vec<Key>,
    comparisons: usize,
    swaps: usize,
    trace: Trace,
}

impl HeapEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value and sift it up.
    ///
    /// Non-finite values are rejected without touching the heap, the counters
    /// or the previous trace.
    pub fn insert(&mut self, value: Key) -> bool {
        if !value.is_finite() {
            warn!(value, "rejected non-finite insert");
            return false;
        }

        self.begin_operation();
        self.heap.push(value);
        let last = self.heap.len() - 1;
        self.record(
            StepKind::Insert { value },
            vec![last],
            self.heap.len(),
            format!("Inserted {}", value),
        );

        self.sift_up(last);
        self.record_heapify_complete();

        self.log_operation("insert");
        true
    }

    /// Remove and return the root (the maximum).
    ///
    /// On an empty heap an `error` step is recorded and `None` is returned.
    pub fn delete(&mut self) -> Option<Key> {
        self.begin_operation();

        let root = match self.heap.len() {
            0 => {
                self.record(StepKind::Error, Vec::new(), 0, "Heap is empty!".to_string());
                warn!("delete on empty heap");
                return None;
            }
            1 => {
                let value = self.heap.pop()?;
                self.record(
                    StepKind::Delete { value },
                    Vec::new(),
                    0,
                    format!("Deleted root: {}", value),
                );
                value
            }
            _ => {
                let root = self.heap[0];
                if let Some(last) = self.heap.pop() {
                    self.heap[0] = last;
                }
                self.record(
                    StepKind::Delete { value: root },
                    vec![0],
                    self.heap.len(),
                    format!("Deleted root: {}, moved last element to root", root),
                );
                self.sift_down(0, self.heap.len());
                self.record_heapify_complete();
                root
            }
        };

        self.log_operation("delete");
        Some(root)
    }

    /// Replace the heap with `values` and heapify it bottom-up
    pub fn build_heap(&mut self, values: &[Key]) {
        self.heap = values.to_vec();
        self.begin_operation();

        if self.heap.is_empty() {
            return;
        }

        let size = self.heap.len();
        self.record(
            StepKind::BuildStart,
            Vec::new(),
            size,
            "Starting to build max heap...".to_string(),
        );

        if size >= 2 {
            let last_non_leaf = (size - 2) / 2;
            for i in (0..=last_non_leaf).rev() {
                self.record(
                    StepKind::Heapify { index: i },
                    vec![i],
                    size,
                    format!("Heapifying at index {}", i),
                );
                self.sift_down(i, size);
            }
        }

        self.record(
            StepKind::BuildComplete,
            Vec::new(),
            size,
            "Max heap built successfully!".to_string(),
        );

        self.log_operation("build_heap");
    }

    /// Heap-sort the current contents, or `values` if given, into ascending order.
    ///
    /// The stored heap is left exactly as it was before sorting; the sorted
    /// sequence is returned and carried by the final `sort_complete` step.
    pub fn heap_sort(&mut self, values: Option<&[Key]>) -> Vec<Key> {
        match values {
            Some(values) => self.build_heap(values),
            None if self.heap.is_empty() => return Vec::new(),
            None => self.begin_operation(),
        }

        if self.heap.is_empty() {
            return Vec::new();
        }

        let original = self.heap.clone();
        let size = self.heap.len();
        let mut sorted: VecDeque<Key> = VecDeque::with_capacity(size);

        self.record(
            StepKind::SortStart,
            Vec::new(),
            size,
            "Starting heap sort...".to_string(),
        );

        for i in (0..size).rev() {
            self.heap.swap(0, i);
            self.swaps += 1;

            let extracted = self.heap[i];
            self.record(
                StepKind::Extract {
                    extracted,
                    sorted: sorted.iter().copied().collect(),
                },
                vec![0, i],
                i,
                format!("Extracted {} to sorted array", extracted),
            );
            sorted.push_front(extracted);

            if i > 0 {
                self.sift_down(0, i);
            }
        }

        self.heap = original;
        let sorted: Vec<Key> = sorted.into_iter().collect();
        self.record(
            StepKind::SortComplete {
                sorted: sorted.clone(),
            },
            Vec::new(),
            size,
            "Heap sort completed!".to_string(),
        );

        self.log_operation("heap_sort");
        sorted
    }

    /// Value copy of the heap array
    pub fn heap(&self) -> Vec<Key> {
        self.heap.clone()
    }

    pub fn root(&self) -> Option<Key> {
        self.heap.first().copied()
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Empty the heap and reset counters and trace
    pub fn clear(&mut self) {
        self.heap.clear();
        self.begin_operation();
    }

    pub fn stats(&self) -> Stats {
        Stats {
            size: self.heap.len(),
            comparisons: self.comparisons,
            swaps: self.swaps,
            steps: self.trace.len(),
        }
    }

    pub fn reset_stats(&mut self) {
        self.comparisons = 0;
        self.swaps = 0;
    }

    /// Drop the current trace. Holders of the old trace keep their copy.
    pub fn clear_animation_steps(&mut self) {
        self.trace = Rc::new(Vec::new());
    }

    /// Shared handle to the trace of the last operation
    pub fn trace(&self) -> Trace {
        Rc::clone(&self.trace)
    }

    pub fn steps(&self) -> &[AnimationStep] {
        &self.trace
    }

    fn begin_operation(&mut self) {
        self.clear_animation_steps();
        self.reset_stats();
    }

    fn sift_up(&mut self, mut index: usize) {
        let size = self.heap.len();
        while index > 0 {
            let parent_idx = parent(index);
            self.comparisons += 1;
            self.record(
                StepKind::Compare,
                vec![index, parent_idx],
                size,
                format!(
                    "Comparing {} with parent {}",
                    self.heap[index], self.heap[parent_idx]
                ),
            );

            if self.heap[index] > self.heap[parent_idx] {
                self.swap(index, parent_idx, size);
                index = parent_idx;
            } else {
                break;
            }
        }
    }

    /// Sift down from `index`, treating only the first `heap_size` elements as the heap
    fn sift_down(&mut self, mut index: usize, heap_size: usize) {
        loop {
            let mut largest = index;
            let left = left_child(index);
            let right = right_child(index);

            if left < heap_size {
                self.comparisons += 1;
                self.record(
                    StepKind::Compare,
                    vec![index, left],
                    heap_size,
                    format!(
                        "Comparing {} with left child {}",
                        self.heap[index], self.heap[left]
                    ),
                );
                if self.heap[left] > self.heap[largest] {
                    largest = left;
                }
            }

            if right < heap_size {
                self.comparisons += 1;
                self.record(
                    StepKind::Compare,
                    vec![index, right],
                    heap_size,
                    format!(
                        "Comparing {} with right child {}",
                        self.heap[largest], self.heap[right]
                    ),
                );
                if self.heap[right] > self.heap[largest] {
                    largest = right;
                }
            }

            if largest == index {
                break;
            }
            self.swap(index, largest, heap_size);
            index = largest;
        }
    }

    fn swap(&mut self, i: usize, j: usize, heap_size: usize) {
        self.heap.swap(i, j);
        self.swaps += 1;
        self.record(
            StepKind::Swap,
            vec![i, j],
            heap_size,
            format!("Swapped {} and {}", self.heap[j], self.heap[i]),
        );
    }

    fn record_heapify_complete(&mut self) {
        self.record(
            StepKind::HeapifyComplete,
            Vec::new(),
            self.heap.len(),
            "Heap property restored".to_string(),
        );
    }

    fn record(&mut self, kind: StepKind, indices: Vec<usize>, heap_size: usize, message: String) {
        let step = AnimationStep {
            kind,
            heap: self.heap.clone(),
            indices,
            heap_size,
            comparisons: self.comparisons,
            swaps: self.swaps,
            message,
            timestamp_ms: now_millis(),
        };
        Rc::make_mut(&mut self.trace).push(step);
    }

    fn log_operation(&self, operation: &str) {
        debug!(
            operation,
            size = self.heap.len(),
            comparisons = self.comparisons,
            swaps = self.swaps,
            steps = self.trace.len(),
            "heap operation finished"
        );
    }
}
