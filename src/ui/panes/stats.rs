//! Statistics pane: counters, playback position and pace

use crate::heap::Stats;
use crate::playback::{PlaybackState, Speed};
use crate::ui::theme::DEFAULT_THEME;
use crate::ui::view::HeapView;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the stats pane
pub struct StatsRenderData<'a> {
    pub view: &'a HeapView,
    /// Live engine stats; `size` reflects the stored heap, not the step
    pub stats: Stats,
    pub cursor: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed: Speed,
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<13}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Render the stats pane
pub fn render_stats_pane(frame: &mut Frame, area: Rect, data: StatsRenderData) {
    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let state = match data.state {
        PlaybackState::Idle => "idle",
        PlaybackState::Playing => "playing",
        PlaybackState::Paused => "paused",
        PlaybackState::Finished => "finished",
    };

    let lines = vec![
        row("Size", data.stats.size.to_string()),
        row("Comparisons", data.view.comparisons.to_string()),
        row("Swaps", data.view.swaps.to_string()),
        row("Step", format!("{}/{}", data.cursor, data.total_steps)),
        row(
            "Speed",
            format!(
                "{} ({} ms)",
                data.speed,
                data.speed.delay().as_millis()
            ),
        ),
        row("Playback", state.to_string()),
        Line::raw(""),
        Line::from(Span::styled(
            data.view.message.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
