//! Replay of recorded heap traces
//!
//! Playback never runs algorithms itself. It walks a finished [`Trace`] with a
//! cursor and hands each visited step to a [`StepRenderer`].
//!
//! - [`controller`]: [`PlaybackController`], the cursor and play/pause state machine
//! - [`ticker`]: [`Ticker`], a single cancellable deadline driven by the caller's clock
//! - [`speed`]: [`Speed`], the clamped 1-10 pace setting and its tick delay
//! - [`renderer`]: the [`StepRenderer`] seam to the presentation layer
//! - [`constants`]: pacing constants
//!
//! [`Trace`]: crate::heap::Trace

pub mod constants;
pub mod controller;
pub mod renderer;
pub mod speed;
pub mod ticker;

pub use controller::{PlaybackController, PlaybackState};
pub use renderer::StepRenderer;
pub use speed::Speed;
pub use ticker::Ticker;
