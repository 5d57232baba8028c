// Animation step records for replaying heap operations

use super::Key;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// The shared, read-only trace of the most recent operation
pub type Trace = Rc<Vec<AnimationStep>>;

/// What happened in a single step, with the data specific to that kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    Insert { value: Key },
    Compare,
    Swap,
    Delete { value: Key },
    HeapifyComplete,
    BuildStart,
    Heapify { index: usize },
    BuildComplete,
    SortStart,
    /// Root swapped to the end of the shrinking heap during heap sort.
    /// `sorted` is the accumulator before `extracted` is added to it.
    Extract { extracted: Key, sorted: Vec<Key> },
    SortComplete { sorted: Vec<Key> },
    Error,
}

impl StepKind {
    /// Stable snake_case tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            StepKind::Insert { .. } => "insert",
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Delete { .. } => "delete",
            StepKind::HeapifyComplete => "heapify_complete",
            StepKind::BuildStart => "build_start",
            StepKind::Heapify { .. } => "heapify",
            StepKind::BuildComplete => "build_complete",
            StepKind::SortStart => "sort_start",
            StepKind::Extract { .. } => "extract",
            StepKind::SortComplete { .. } => "sort_complete",
            StepKind::Error => "error",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One immutable record in a trace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationStep {
    #[serde(flatten)]
    pub kind: StepKind,
    /// Value copy of the heap array when the step was recorded
    pub heap: Vec<Key>,
    pub indices: Vec<usize>,
    /// Logical heap size; smaller than `heap.len()` while sorting
    pub heap_size: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub message: String,
    pub timestamp_ms: u64,
}

impl AnimationStep {
    pub fn is_sort_complete(&self) -> bool {
        matches!(self.kind, StepKind::SortComplete { .. })
    }
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(kind: StepKind) -> AnimationStep {
        AnimationStep {
            kind,
            heap: vec![9.0, 4.0],
            indices: vec![0, 1],
            heap_size: 2,
            comparisons: 1,
            swaps: 0,
            message: String::from("Comparing 9 with left child 4"),
            timestamp_ms: 0,
        }
    }

    #[test]
    fn test_tags_are_snake_case() {
        assert_eq!(StepKind::HeapifyComplete.tag(), "heapify_complete");
        assert_eq!(StepKind::Heapify { index: 3 }.tag(), "heapify");
        assert_eq!(
            StepKind::SortComplete { sorted: vec![] }.to_string(),
            "sort_complete"
        );
    }

    #[test]
    fn test_serialized_step_carries_type_tag() {
        let json = serde_json::to_value(step(StepKind::Compare)).unwrap();
        assert_eq!(json["type"], "compare");
        assert_eq!(json["heap_size"], 2);
        assert_eq!(json["indices"], serde_json::json!([0, 1]));
    }

    #[test]
    fn test_serialized_extract_flattens_payload() {
        let json = serde_json::to_value(step(StepKind::Extract {
            extracted: 9.0,
            sorted: vec![],
        }))
        .unwrap();
        assert_eq!(json["type"], "extract");
        assert_eq!(json["extracted"], 9.0);
        assert_eq!(json["sorted"], serde_json::json!([]));
    }
}
