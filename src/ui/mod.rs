//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, input prompts
//! - **[`view`]**: [`HeapView`], the [`StepRenderer`] that turns replayed steps
//!   into highlight/sorted state
//! - **[`panes`]**: stateless render functions for each visible pane (tree,
//!   array, stats, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop.
//!
//! [`StepRenderer`]: crate::playback::StepRenderer
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;
pub mod view;

pub use app::App;
pub use view::{CellState, HeapView};
