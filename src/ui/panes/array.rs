//! Array pane: the heap as a row of cells with their indices

use crate::ui::theme::DEFAULT_THEME;
use crate::ui::view::{CellState, HeapView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn cell_style(state: CellState) -> Style {
    let bg = match state {
        CellState::Default => DEFAULT_THEME.node_default,
        CellState::Root => DEFAULT_THEME.node_root,
        CellState::Comparing => DEFAULT_THEME.comparing,
        CellState::Swapping => DEFAULT_THEME.swapping,
        CellState::Sorted => DEFAULT_THEME.sorted,
    };
    Style::default()
        .bg(bg)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

/// Width of one cell, wide enough for the longest value
pub fn cell_width(values: &[f64]) -> usize {
    values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        + 2
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, view: &HeapView) {
    let block = Block::default()
        .title(" Array ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if view.heap.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = cell_width(&view.heap);
    let mut values = Vec::with_capacity(view.heap.len() * 2);
    let mut indices = Vec::with_capacity(view.heap.len() * 2);

    for (index, value) in view.heap.iter().enumerate() {
        values.push(Span::styled(
            format!("{:^width$}", value, width = width),
            cell_style(view.cell_state(index)),
        ));
        values.push(Span::raw(" "));

        indices.push(Span::styled(
            format!("{:^width$}", index, width = width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        indices.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(vec![Line::from(values), Line::from(indices)])
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
