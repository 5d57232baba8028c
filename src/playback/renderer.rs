// Presentation seam for playback

use crate::heap::AnimationStep;

/// Receives the steps visited by a [`PlaybackController`].
///
/// A step carries everything needed to redraw: kind, heap snapshot, relevant
/// indices, logical size, counters and message.
///
/// [`PlaybackController`]: super::PlaybackController
pub trait StepRenderer {
    /// Draw `step`, which sits at `position` in the trace
    fn render(&mut self, position: usize, step: &AnimationStep);

    /// Playback reached the end of the trace; the last rendered state stays up.
    /// `mark_all_sorted` is set when the trace ended with `sort_complete`.
    fn finish(&mut self, mark_all_sorted: bool);

    /// Drop all highlights and shown state
    fn clear(&mut self);
}
