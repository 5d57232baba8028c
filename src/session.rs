//! Top-level owner of one heap engine, one playback controller and one renderer
//!
//! Every heap command follows the same order: cancel whatever playback is
//! pending, run the engine to completion, then start playing the fresh trace.
//! Cancelling first guarantees no tick from a superseded trace ever reaches
//! the renderer.

use crate::heap::{HeapEngine, HeapError, Key, Stats};
use crate::playback::{PlaybackController, Speed, StepRenderer};
use std::time::Instant;
use tracing::{info, warn};

pub struct Session<R: StepRenderer> {
    engine: HeapEngine,
    controller: PlaybackController,
    renderer: R,
}

impl<R: StepRenderer> Session<R> {
    pub fn new(renderer: R, speed: Speed) -> Self {
        Session {
            engine: HeapEngine::new(),
            controller: PlaybackController::new(speed),
            renderer,
        }
    }

    /// Insert `value` and play the sift-up
    pub fn insert(&mut self, value: Key, now: Instant) -> Result<(), HeapError> {
        if !value.is_finite() {
            warn!(value, "insert rejected");
            return Err(not_finite(value));
        }

        self.controller.cancel();
        if !self.engine.insert(value) {
            return Err(not_finite(value));
        }
        info!(value, size = self.engine.size(), "inserted");
        self.play(now);
        Ok(())
    }

    /// Remove the maximum and play the sift-down.
    ///
    /// On an empty heap the single `error` step is played and
    /// [`HeapError::EmptyHeap`] is returned.
    pub fn delete(&mut self, now: Instant) -> Result<Key, HeapError> {
        self.controller.cancel();
        let removed = self.engine.delete();
        self.play(now);

        match removed {
            Some(value) => {
                info!(value, size = self.engine.size(), "deleted root");
                Ok(value)
            }
            None => {
                warn!("delete on empty heap");
                Err(HeapError::EmptyHeap)
            }
        }
    }

    /// Re-heapify the current contents
    pub fn build_heap(&mut self, now: Instant) -> Result<(), HeapError> {
        let current = self.require_elements("build heap")?;

        self.controller.cancel();
        self.engine.build_heap(&current);
        info!(size = current.len(), "built heap");
        self.play(now);
        Ok(())
    }

    /// Replace the heap with `values`, heapifying them. An empty list empties the heap.
    pub fn load(&mut self, values: &[Key], now: Instant) {
        self.controller.cancel();
        self.engine.build_heap(values);
        info!(size = values.len(), "loaded values");
        if values.is_empty() {
            self.controller.reset(&mut self.renderer);
        } else {
            self.play(now);
        }
    }

    /// Sort the current contents; the stored heap is left unchanged
    pub fn heap_sort(&mut self, now: Instant) -> Result<Vec<Key>, HeapError> {
        let current = self.require_elements("heap sort")?;

        self.controller.cancel();
        let sorted = self.engine.heap_sort(Some(&current));
        info!(size = sorted.len(), "sorted heap");
        self.play(now);
        Ok(sorted)
    }

    /// Empty the heap and drop any trace and highlights
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Stop playback and clear engine, trace, cursor and renderer
    pub fn reset(&mut self) {
        self.controller.cancel();
        self.engine.clear();
        self.controller.reset(&mut self.renderer);
        info!("session reset");
    }

    /// Replay the current trace from the start
    pub fn play(&mut self, now: Instant) {
        let trace = self.engine.trace();
        self.controller.play(trace, now, &mut self.renderer);
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn resume(&mut self, now: Instant) {
        self.controller.resume(now, &mut self.renderer);
    }

    pub fn toggle(&mut self, now: Instant) {
        self.controller.toggle(now, &mut self.renderer);
    }

    pub fn step_forward(&mut self) {
        self.controller.step_forward(&mut self.renderer);
    }

    pub fn step_backward(&mut self) {
        self.controller.step_backward(&mut self.renderer);
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.controller.set_speed(speed);
    }

    pub fn speed(&self) -> Speed {
        self.controller.speed()
    }

    /// Drive playback; call this from the event loop
    pub fn advance(&mut self, now: Instant) -> bool {
        self.controller.advance(now, &mut self.renderer)
    }

    pub fn heap(&self) -> Vec<Key> {
        self.engine.heap()
    }

    pub fn stats(&self) -> Stats {
        self.engine.stats()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    pub fn engine(&self) -> &HeapEngine {
        &self.engine
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn require_elements(&self, command: &str) -> Result<Vec<Key>, HeapError> {
        if self.engine.is_empty() {
            warn!(command, "command on empty heap");
            return Err(HeapError::EmptyHeap);
        }
        Ok(self.engine.heap())
    }
}

fn not_finite(value: Key) -> HeapError {
    HeapError::InvalidInput(format!("{} is not a finite number", value))
}
