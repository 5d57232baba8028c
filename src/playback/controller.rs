//! Cursor-based replay of a heap trace
//!
//! The controller owns a cursor counting how many steps of the loaded trace
//! have been visited (`0 <= cursor <= len`). While playing, every tick renders
//! the step under the cursor, advances it and schedules the next tick one
//! [`Speed::delay`] later. The tick that finds the cursor at the end completes
//! playback, so the final step stays on screen for a full delay first.
//!
//! Time is supplied by the caller (`now`), which keeps the controller
//! deterministic and usable from any event loop.

use super::renderer::StepRenderer;
use super::speed::Speed;
use super::ticker::Ticker;
use crate::heap::{AnimationStep, Trace};
use std::rc::Rc;
use std::time::Instant;
use tracing::trace;

/// Where playback currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No trace loaded
    Idle,
    Playing,
    Paused,
    /// Playback ran to the end of the trace
    Finished,
}

#[derive(Debug)]
pub struct PlaybackController {
    trace: Trace,
    cursor: usize,
    state: PlaybackState,
    speed: Speed,
    ticker: Ticker,
    last_rendered: Option<usize>,
}

impl PlaybackController {
    pub fn new(speed: Speed) -> Self {
        PlaybackController {
            trace: Rc::new(Vec::new()),
            cursor: 0,
            state: PlaybackState::Idle,
            speed,
            ticker: Ticker::new(),
            last_rendered: None,
        }
    }

    /// Load `trace` and rewind without rendering anything
    pub fn load(&mut self, trace: Trace) {
        self.ticker.cancel();
        self.trace = trace;
        self.cursor = 0;
        self.last_rendered = None;
        self.state = PlaybackState::Paused;
    }

    /// Load `trace`, rewind and start playing; step 0 is rendered immediately
    pub fn play<R: StepRenderer>(&mut self, trace: Trace, now: Instant, renderer: &mut R) {
        self.load(trace);
        self.state = PlaybackState::Playing;
        self.ticker.schedule(now);
        self.advance(now, renderer);
    }

    /// Stop scheduling without moving the cursor
    pub fn pause(&mut self) {
        self.ticker.cancel();
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Continue playing from the current cursor
    pub fn resume<R: StepRenderer>(&mut self, now: Instant, renderer: &mut R) {
        if self.trace.is_empty() {
            return;
        }
        self.state = PlaybackState::Playing;
        self.ticker.schedule(now);
        self.advance(now, renderer);
    }

    /// Pause if playing, otherwise resume when there is something to play
    pub fn toggle<R: StepRenderer>(&mut self, now: Instant, renderer: &mut R) {
        if self.is_playing() {
            self.pause();
        } else if !self.trace.is_empty() {
            self.resume(now, renderer);
        }
    }

    /// Discard any pending tick before the trace is superseded
    pub fn cancel(&mut self) {
        self.pause();
    }

    /// Fire the pending tick if it is due. Returns true if a tick fired.
    pub fn advance<R: StepRenderer>(&mut self, now: Instant, renderer: &mut R) -> bool {
        if self.state != PlaybackState::Playing || !self.ticker.poll(now) {
            return false;
        }

        if self.cursor >= self.trace.len() {
            self.complete(renderer);
            return true;
        }

        let position = self.cursor;
        trace!(position, total = self.trace.len(), "playback tick");
        renderer.render(position, &self.trace[position]);
        self.last_rendered = Some(position);
        self.cursor += 1;
        self.ticker.schedule(now + self.speed.delay());
        true
    }

    /// Pause and render the next step. No-op at the end of the trace.
    pub fn step_forward<R: StepRenderer>(&mut self, renderer: &mut R) {
        if self.cursor >= self.trace.len() {
            return;
        }
        self.pause();
        self.state = PlaybackState::Paused;
        self.cursor += 1;
        let position = self.cursor - 1;
        renderer.render(position, &self.trace[position]);
        self.last_rendered = Some(position);
    }

    /// Pause, move back one step and render the step at the new cursor.
    /// No-op at the start of the trace.
    pub fn step_backward<R: StepRenderer>(&mut self, renderer: &mut R) {
        if self.cursor == 0 {
            return;
        }
        self.pause();
        self.state = PlaybackState::Paused;
        self.cursor -= 1;
        let position = self.cursor;
        renderer.render(position, &self.trace[position]);
        self.last_rendered = Some(position);
    }

    /// Stop, drop the trace and rewind
    pub fn reset<R: StepRenderer>(&mut self, renderer: &mut R) {
        self.ticker.cancel();
        self.trace = Rc::new(Vec::new());
        self.cursor = 0;
        self.last_rendered = None;
        self.state = PlaybackState::Idle;
        renderer.clear();
    }

    /// Change the pace; the pending deadline is left alone
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.trace.len()
    }

    /// The step most recently handed to the renderer
    pub fn current_step(&self) -> Option<&AnimationStep> {
        self.last_rendered.and_then(|i| self.trace.get(i))
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.ticker.next_due()
    }

    fn complete<R: StepRenderer>(&mut self, renderer: &mut R) {
        self.ticker.cancel();
        self.state = PlaybackState::Finished;
        let mark_all_sorted = self
            .trace
            .last()
            .is_some_and(AnimationStep::is_sort_complete);
        trace!(mark_all_sorted, "playback complete");
        renderer.finish(mark_all_sorted);
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(Speed::default())
    }
}
