//! Main TUI application state and logic

use crate::heap::parse::{parse_key, parse_keys};
use crate::heap::{HeapError, Key};
use crate::playback::constants::POLL_INTERVAL_MS;
use crate::session::Session;
use crate::ui::panes::{
    render_array_pane, render_input_bar, render_stats_pane, render_status_bar, render_tree_pane,
    StatsRenderData, StatusRenderData,
};
use crate::ui::view::HeapView;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// What the open prompt is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// A single value to insert
    Insert,
    /// A list of values that replaces the heap
    Load,
}

impl InputMode {
    fn prompt(self) -> &'static str {
        match self {
            InputMode::Insert => "Insert value:",
            InputMode::Load => "Load values (comma separated):",
        }
    }
}

/// An open input prompt
#[derive(Debug, Clone)]
pub struct InputPrompt {
    pub mode: InputMode,
    pub buffer: String,
    /// Inline validation error from the last submit
    pub error: Option<String>,
}

impl InputPrompt {
    fn new(mode: InputMode) -> Self {
        InputPrompt {
            mode,
            buffer: String::new(),
            error: None,
        }
    }
}

/// The main application state
pub struct App {
    /// The session holding the heap, its trace and the playback cursor
    pub session: Session<HeapView>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failed command
    pub status_is_error: bool,

    /// Open input prompt, if any
    pub input: Option<InputPrompt>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around `session`
    pub fn new(session: Session<HeapView>) -> Self {
        App {
            session,
            should_quit: false,
            status_message: String::from("Ready! Press i to insert a value."),
            status_is_error: false,
            input: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.session.advance(Instant::now());

            // Use poll with timeout so playback keeps ticking without input
            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Tree (top) | Array (bottom) on the left, stats on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
            .split(main_chunks[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(5)])
            .split(columns[0]);

        let view = self.session.renderer();
        let controller = self.session.controller();

        render_tree_pane(frame, left_rows[0], view);
        render_array_pane(frame, left_rows[1], view);
        render_stats_pane(
            frame,
            columns[1],
            StatsRenderData {
                view,
                stats: self.session.stats(),
                cursor: controller.cursor(),
                total_steps: controller.len(),
                state: controller.state(),
                speed: controller.speed(),
            },
        );

        match &self.input {
            Some(prompt) => render_input_bar(
                frame,
                main_chunks[1],
                prompt.mode.prompt(),
                &prompt.buffer,
                prompt.error.as_deref(),
            ),
            None => render_status_bar(
                frame,
                main_chunks[1],
                StatusRenderData {
                    message: &self.status_message,
                    is_error: self.status_is_error,
                    cursor: controller.cursor(),
                    total_steps: controller.len(),
                    state: controller.state(),
                },
            ),
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        let now = Instant::now();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('i') => {
                self.input = Some(InputPrompt::new(InputMode::Insert));
            }
            KeyCode::Char('l') => {
                self.input = Some(InputPrompt::new(InputMode::Load));
            }
            KeyCode::Char('d') => match self.session.delete(now) {
                Ok(value) => self.set_status(format!("Deleted root {}", value)),
                Err(e) => self.set_error(e),
            },
            KeyCode::Char('b') => match self.session.build_heap(now) {
                Ok(()) => self.set_status("Building max heap".to_string()),
                Err(e) => self.set_error(e),
            },
            KeyCode::Char('s') => match self.session.heap_sort(now) {
                Ok(sorted) => self.set_status(format!("Sorted: [{}]", format_keys(&sorted))),
                Err(e) => self.set_error(e),
            },
            KeyCode::Char('c') => {
                self.session.clear();
                self.set_status("Cleared".to_string());
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.set_status("Reset".to_string());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.session.speed().faster();
                self.session.set_speed(speed);
                self.set_status(format!("Speed {}", speed));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let speed = self.session.speed().slower();
                self.session.set_speed(speed);
                self.set_status(format!("Speed {}", speed));
            }
            KeyCode::Left => {
                self.session.step_backward();
                self.set_status("Stepped backward".to_string());
            }
            KeyCode::Right => {
                self.session.step_forward();
                self.set_status("Stepped forward".to_string());
            }
            KeyCode::Enter => {
                // Jump to end of the trace
                let total = self.session.controller().len();
                while self.session.controller().cursor() < total {
                    self.session.step_forward();
                }
                self.set_status("Jumped to end".to_string());
            }
            KeyCode::Backspace => {
                // Jump to start of the trace
                while self.session.controller().cursor() > 0 {
                    self.session.step_backward();
                }
                self.set_status("Jumped to start".to_string());
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.session.toggle(now);
                    let status = if self.session.controller().is_playing() {
                        "Playing..."
                    } else {
                        "Paused"
                    };
                    self.set_status(status.to_string());
                }
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.input.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.input = None;
                self.set_status("Cancelled".to_string());
            }
            KeyCode::Backspace => {
                prompt.buffer.pop();
                prompt.error = None;
            }
            KeyCode::Char(c) => {
                prompt.buffer.push(c);
                prompt.error = None;
            }
            KeyCode::Enter => {
                let mode = prompt.mode;
                let text = prompt.buffer.clone();
                match self.submit(mode, &text) {
                    Ok(status) => {
                        self.input = None;
                        self.set_status(status);
                    }
                    Err(e) => {
                        debug!(error = %e, "input rejected");
                        if let Some(prompt) = self.input.as_mut() {
                            prompt.error = Some(e.to_string());
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self, mode: InputMode, text: &str) -> Result<String, HeapError> {
        let now = Instant::now();
        match mode {
            InputMode::Insert => {
                let value = parse_key(text)?;
                self.session.insert(value, now)?;
                Ok(format!("Inserted {}", value))
            }
            InputMode::Load => {
                let values = parse_keys(text)?;
                self.session.load(&values, now);
                Ok(format!("Loaded {} value(s)", values.len()))
            }
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = false;
    }

    fn set_error(&mut self, error: HeapError) {
        self.status_message = match error {
            HeapError::EmptyHeap => "Heap is empty! Please insert some values first.".to_string(),
            other => other.to_string(),
        };
        self.status_is_error = true;
    }
}

/// Join keys for display
pub fn format_keys(keys: &[Key]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
