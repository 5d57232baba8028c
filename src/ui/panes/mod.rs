//! TUI pane rendering modules
//!
//! Each pane exports a stateless `render_*` function that draws from the
//! [`HeapView`](crate::ui::view::HeapView) and playback state it is given.
//!
//! # Pane Modules
//!
//! - [`tree`]: the logical heap drawn as a binary tree
//! - [`array`]: the underlying array with per-cell color state and indices
//! - [`stats`]: counters, step position, speed and the current step message
//! - [`status`]: status bar with keybindings, or the input prompt while typing

pub mod array;
pub mod stats;
pub mod status;
pub mod tree;

pub use array::render_array_pane;
pub use stats::{render_stats_pane, StatsRenderData};
pub use status::{render_input_bar, render_status_bar, StatusRenderData};
pub use tree::render_tree_pane;
