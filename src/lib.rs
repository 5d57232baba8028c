//! # Introduction
//!
//! heapviz runs classic binary max-heap algorithms (insert, extract-max,
//! build-heap, heap-sort) and records every comparison and swap as an
//! immutable animation step. The recorded trace is then replayed forward and
//! backward, at an adjustable pace, through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Command → HeapEngine → Trace → PlaybackController → StepRenderer → TUI
//! ```
//!
//! 1. [`heap`]: the heap engine and the [`heap::AnimationStep`] records it
//!    emits. Each operation runs to completion and replaces the trace.
//! 2. [`playback`]: a cursor over the last trace, stepped by hand or by a
//!    cancellable ticker driven by the caller's clock.
//! 3. [`session`]: owns one engine, one controller and one renderer, and
//!    cancels pending playback before every heap mutation.
//! 4. [`config`]: runtime configuration and the headless trace dump.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod heap;
pub mod playback;
pub mod session;
pub mod ui;
