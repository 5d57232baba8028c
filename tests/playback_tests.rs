// Integration tests for playback and the session layer

use heapviz::heap::{AnimationStep, HeapEngine, HeapError, StepKind};
use heapviz::playback::{PlaybackController, PlaybackState, Speed, StepRenderer};
use heapviz::session::Session;
use heapviz::ui::{CellState, HeapView};
use std::time::{Duration, Instant};

/// Renderer that remembers everything it was asked to draw
#[derive(Default)]
struct RecordingRenderer {
    rendered: Vec<(usize, String)>,
    finished: Vec<bool>,
    cleared: usize,
}

impl StepRenderer for RecordingRenderer {
    fn render(&mut self, position: usize, step: &AnimationStep) {
        self.rendered.push((position, step.kind.tag().to_string()));
    }

    fn finish(&mut self, mark_all_sorted: bool) {
        self.finished.push(mark_all_sorted);
    }

    fn clear(&mut self) {
        self.cleared += 1;
    }
}

impl RecordingRenderer {
    fn positions(&self) -> Vec<usize> {
        self.rendered.iter().map(|(p, _)| *p).collect()
    }
}

/// Play every remaining tick of the current trace
fn run_to_end(session: &mut Session<RecordingRenderer>, start: Instant) -> Instant {
    let mut now = start;
    let delay = session.speed().delay();
    while session.controller().state() == PlaybackState::Playing {
        now += delay;
        session.advance(now);
    }
    now
}

#[test]
fn test_seven_step_trace_stepping() {
    let mut engine = HeapEngine::new();
    engine.build_heap(&[9.0, 5.0, 8.0, 1.0, 3.0, 2.0, 7.0]);
    // 6 rises past 1 and 5, then stops below 9
    engine.insert(6.0);
    let trace = engine.trace();
    assert_eq!(trace.len(), 7);

    let mut controller = PlaybackController::new(Speed::new(10));
    let mut renderer = RecordingRenderer::default();
    controller.load(trace);

    for _ in 0..7 {
        controller.step_forward(&mut renderer);
    }
    assert_eq!(renderer.positions(), (0..7).collect::<Vec<_>>());
    assert_eq!(
        renderer.rendered.last().map(|(_, tag)| tag.as_str()),
        Some("heapify_complete")
    );
    assert_eq!(controller.cursor(), 7);

    controller.step_forward(&mut renderer);
    assert_eq!(renderer.rendered.len(), 7);
    assert_eq!(controller.cursor(), 7);
    assert!(renderer.finished.is_empty());
}

#[test]
fn test_play_then_pause_renders_nothing_more() {
    let start = Instant::now();
    let mut session = Session::new(RecordingRenderer::default(), Speed::new(10));
    session.insert(3.0, start).unwrap();
    session.insert(7.0, start).unwrap();
    assert_eq!(session.renderer().positions(), vec![0, 0]);

    session.pause();
    session.advance(start + Duration::from_secs(10));
    assert_eq!(session.renderer().rendered.len(), 2);
    assert_eq!(session.controller().state(), PlaybackState::Paused);
}

#[test]
fn test_new_command_cancels_pending_playback() {
    let start = Instant::now();
    let mut session = Session::new(RecordingRenderer::default(), Speed::new(10));
    session.load(&[1.0, 2.0, 3.0, 4.0, 5.0], start);
    assert_eq!(session.renderer().rendered.len(), 1);

    // A new operation starts before the build trace finished replaying
    session.insert(10.0, start + Duration::from_millis(50)).unwrap();
    let after_insert = session.renderer().rendered.len();
    assert_eq!(session.renderer().rendered[after_insert - 1].1, "insert");

    // Only the insert trace is replayed from here on
    run_to_end(&mut session, start + Duration::from_millis(50));
    let tags: Vec<&str> = session.renderer().rendered[after_insert - 1..]
        .iter()
        .map(|(_, tag)| tag.as_str())
        .collect();
    assert!(!tags.contains(&"build_complete"));
    assert!(!tags.contains(&"heapify"));
    assert_eq!(tags.last(), Some(&"heapify_complete"));
    assert_eq!(session.renderer().finished, vec![false]);
}

#[test]
fn test_sort_playback_marks_sorted_on_completion() {
    let start = Instant::now();
    let mut session = Session::new(RecordingRenderer::default(), Speed::new(10));
    session.load(&[4.0, 1.0, 3.0], start);
    run_to_end(&mut session, start);
    assert_eq!(session.renderer().finished, vec![false]);

    let sorted = session.heap_sort(start).unwrap();
    assert_eq!(sorted, vec![1.0, 3.0, 4.0]);
    run_to_end(&mut session, start);
    assert_eq!(session.renderer().finished, vec![false, true]);
    assert_eq!(session.controller().state(), PlaybackState::Finished);
    assert!(session.controller().is_at_end());
}

#[test]
fn test_session_rejects_invalid_insert_without_cancelling() {
    let start = Instant::now();
    let mut session = Session::new(RecordingRenderer::default(), Speed::new(10));
    session.load(&[2.0, 1.0], start);

    let err = session.insert(f64::NAN, start).unwrap_err();
    assert!(matches!(err, HeapError::InvalidInput(_)));
    assert!(session.controller().is_playing());
    assert_eq!(session.heap(), vec![2.0, 1.0]);
}

#[test]
fn test_session_empty_heap_commands() {
    let start = Instant::now();
    let mut session = Session::new(RecordingRenderer::default(), Speed::default());

    assert_eq!(session.build_heap(start), Err(HeapError::EmptyHeap));
    assert_eq!(session.heap_sort(start), Err(HeapError::EmptyHeap));
    assert!(session.renderer().rendered.is_empty());

    assert_eq!(session.delete(start), Err(HeapError::EmptyHeap));
    assert_eq!(session.renderer().rendered, vec![(0, "error".to_string())]);
    assert_eq!(session.stats().steps, 1);
}

#[test]
fn test_session_reset_clears_everything() {
    let start = Instant::now();
    let mut session = Session::new(RecordingRenderer::default(), Speed::default());
    session.load(&[5.0, 6.0], start);
    session.reset();

    assert!(session.is_empty());
    assert_eq!(session.stats().steps, 0);
    assert_eq!(session.controller().cursor(), 0);
    assert_eq!(session.controller().state(), PlaybackState::Idle);
    assert_eq!(session.renderer().cleared, 1);
}

#[test]
fn test_heap_view_follows_sort_playback() {
    let start = Instant::now();
    let mut session = Session::new(HeapView::new(), Speed::new(10));
    session.load(&[9.0, 4.0, 7.0], start);
    session.heap_sort(start).unwrap();

    let total = session.controller().len();
    while session.controller().cursor() < total {
        session.step_forward();
    }
    let view = session.renderer();
    assert_eq!(view.kind, Some(StepKind::SortComplete { sorted: vec![] }.tag()));
    assert_eq!(view.message, "Heap sort completed!");
    assert!((0..3).all(|i| view.cell_state(i) == CellState::Sorted));
    assert_eq!(view.heap, session.heap());
}
