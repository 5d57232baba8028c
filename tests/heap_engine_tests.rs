// Integration tests for the heap engine and its traces

use heapviz::heap::{is_max_heap, HeapEngine, StepKind};

/// Small deterministic generator so the sequences are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn key(&mut self) -> f64 {
        (self.next() % 50) as f64
    }
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut copy = values.to_vec();
    copy.sort_by(|a, b| a.total_cmp(b));
    copy
}

fn assert_counters_non_decreasing(engine: &HeapEngine) {
    for pair in engine.steps().windows(2) {
        assert!(pair[1].comparisons >= pair[0].comparisons);
        assert!(pair[1].swaps >= pair[0].swaps);
    }
}

#[test]
fn test_insert_scenario() {
    let mut engine = HeapEngine::new();
    assert!(engine.insert(5.0));
    assert!(engine.insert(3.0));
    assert!(engine.insert(8.0));

    assert_eq!(engine.heap(), vec![8.0, 3.0, 5.0]);
    assert_eq!(engine.root(), Some(8.0));

    // Comparisons are per operation; count them across all three inserts
    let mut engine = HeapEngine::new();
    let mut comparisons = 0;
    let mut swaps = 0;
    for value in [5.0, 3.0, 8.0] {
        engine.insert(value);
        comparisons += engine.stats().comparisons;
        swaps += engine.stats().swaps;
    }
    assert!(comparisons >= 2);
    assert!(swaps >= 1);
}

#[test]
fn test_build_heap_scenario() {
    let input = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
    let mut engine = HeapEngine::new();
    engine.build_heap(&input);

    let heap = engine.heap();
    assert!(is_max_heap(&heap, heap.len()));
    assert_eq!(sorted_copy(&heap), sorted_copy(&input));
    assert_eq!(heap[0], 9.0);

    let steps = engine.steps();
    assert_eq!(steps[0].kind, StepKind::BuildStart);
    assert_eq!(steps.last().map(|s| s.kind.clone()), Some(StepKind::BuildComplete));
    assert_counters_non_decreasing(&engine);
}

#[test]
fn test_heap_sort_scenario() {
    let input = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
    let mut engine = HeapEngine::new();
    let sorted = engine.heap_sort(Some(&input));

    assert_eq!(sorted, vec![1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 9.0]);

    match &engine.steps().last().expect("trace should not be empty").kind {
        StepKind::SortComplete { sorted: recorded } => assert_eq!(recorded, &sorted),
        other => panic!("Expected sort_complete, got {}", other),
    }
    assert_counters_non_decreasing(&engine);
}

#[test]
fn test_heap_sort_is_non_destructive() {
    let mut engine = HeapEngine::new();
    engine.build_heap(&[7.0, 2.0, 9.0, 4.0, 4.0]);
    let before = engine.heap();

    let sorted = engine.heap_sort(None);
    assert_eq!(sorted, vec![2.0, 4.0, 4.0, 7.0, 9.0]);
    assert_eq!(engine.heap(), before);

    let last = engine.steps().last().expect("trace should not be empty");
    assert_eq!(last.heap, before);
}

#[test]
fn test_heap_sort_extract_order() {
    let mut engine = HeapEngine::new();
    engine.heap_sort(Some(&[2.0, 8.0, 5.0]));

    let extracted: Vec<f64> = engine
        .steps()
        .iter()
        .filter_map(|s| match &s.kind {
            StepKind::Extract { extracted, .. } => Some(*extracted),
            _ => None,
        })
        .collect();
    assert_eq!(extracted, vec![8.0, 5.0, 2.0]);

    let accumulated: Vec<usize> = engine
        .steps()
        .iter()
        .filter_map(|s| match &s.kind {
            StepKind::Extract { sorted, .. } => Some(sorted.len()),
            _ => None,
        })
        .collect();
    assert_eq!(accumulated, vec![0, 1, 2]);
}

#[test]
fn test_delete_scenario() {
    let mut engine = HeapEngine::new();
    engine.build_heap(&[9.0, 5.0, 8.0, 1.0, 3.0]);
    assert_eq!(engine.heap(), vec![9.0, 5.0, 8.0, 1.0, 3.0]);

    assert_eq!(engine.delete(), Some(9.0));
    let heap = engine.heap();
    assert!(is_max_heap(&heap, heap.len()));
    assert_eq!(sorted_copy(&heap), vec![1.0, 3.0, 5.0, 8.0]);
    assert_eq!(heap, vec![8.0, 5.0, 3.0, 1.0]);

    let tags: Vec<&str> = engine.steps().iter().map(|s| s.kind.tag()).collect();
    assert_eq!(tags.first(), Some(&"delete"));
    assert_eq!(tags.last(), Some(&"heapify_complete"));
}

#[test]
fn test_empty_heap_boundaries() {
    let mut engine = HeapEngine::new();

    engine.build_heap(&[]);
    assert_eq!(engine.stats().steps, 0);

    assert!(engine.heap_sort(None).is_empty());
    assert_eq!(engine.stats().steps, 0);

    assert_eq!(engine.delete(), None);
    assert_eq!(engine.stats().steps, 1);
    assert_eq!(engine.steps()[0].kind, StepKind::Error);
    assert!(engine.is_empty());
}

#[test]
fn test_random_insert_delete_preserves_heap_property() {
    let mut rng = Lcg(0x5eed);
    let mut engine = HeapEngine::new();
    let mut model: Vec<f64> = Vec::new();

    for _ in 0..500 {
        if rng.next() % 3 == 0 {
            let expected = model
                .iter()
                .copied()
                .max_by(|a, b| a.total_cmp(b));
            if let Some(max) = expected {
                let pos = model.iter().position(|&v| v == max).unwrap();
                model.swap_remove(pos);
            }
            assert_eq!(engine.delete(), expected);
        } else {
            let key = rng.key();
            engine.insert(key);
            model.push(key);
        }

        let heap = engine.heap();
        assert!(is_max_heap(&heap, heap.len()), "heap property broken: {:?}", heap);
        assert_eq!(heap.len(), model.len());
        assert_counters_non_decreasing(&engine);
    }
}

#[test]
fn test_random_heap_sort_matches_std_sort() {
    let mut rng = Lcg(42);
    for len in 0..40 {
        let input: Vec<f64> = (0..len).map(|_| rng.key()).collect();
        let mut engine = HeapEngine::new();
        let sorted = engine.heap_sort(Some(&input));
        assert_eq!(sorted, sorted_copy(&input));
    }
}

#[test]
fn test_get_heap_and_clear_are_idempotent() {
    let mut engine = HeapEngine::new();
    engine.build_heap(&[4.0, 8.0, 1.0]);
    assert_eq!(engine.heap(), engine.heap());

    for _ in 0..2 {
        engine.clear();
        let stats = engine.stats();
        assert!(engine.is_empty());
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.steps, 0);
    }
}
