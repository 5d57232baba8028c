//! Binary tree pane
//!
//! Draws the logical heap as a tree on a ratatui [`Canvas`]. Node `i` sits on
//! level `floor(log2(i + 1))`; each level splits the width of its parent's
//! segment in half, so a node is centred over the span of its subtree.

use crate::ui::theme::DEFAULT_THEME;
use crate::ui::view::{CellState, HeapView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Canvas coordinate extent on both axes
const CANVAS_EXTENT: f64 = 100.0;

/// Position of a node in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    pub x: f64,
    pub level: usize,
}

/// Lay out the first `size` nodes across `width`
pub fn tree_positions(size: usize, width: f64) -> Vec<NodePosition> {
    (0..size)
        .map(|index| {
            let level = level_of(index);
            let first_on_level = (1usize << level) - 1;
            let segment = width / (1usize << level) as f64;
            NodePosition {
                x: segment * ((index - first_on_level) as f64 + 0.5),
                level,
            }
        })
        .collect()
}

/// Number of levels needed for `size` nodes
pub fn tree_depth(size: usize) -> usize {
    if size == 0 {
        0
    } else {
        level_of(size - 1) + 1
    }
}

fn level_of(index: usize) -> usize {
    (usize::BITS - (index + 1).leading_zeros() - 1) as usize
}

fn node_color(state: CellState) -> Color {
    match state {
        CellState::Default => DEFAULT_THEME.node_default,
        CellState::Root => DEFAULT_THEME.node_root,
        CellState::Comparing => DEFAULT_THEME.comparing,
        CellState::Swapping => DEFAULT_THEME.swapping,
        CellState::Sorted => DEFAULT_THEME.sorted,
    }
}

/// Render the tree pane
pub fn render_tree_pane(frame: &mut Frame, area: Rect, view: &HeapView) {
    let block = Block::default()
        .title(" Heap Tree ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let size = view.logical_size();
    if size == 0 {
        let paragraph = Paragraph::new("Heap is empty")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let positions = tree_positions(size, CANVAS_EXTENT);
    let depth = tree_depth(size);
    let level_height = CANVAS_EXTENT / depth as f64;
    let y_of = |level: usize| CANVAS_EXTENT - (level as f64 + 0.5) * level_height;

    // Canvas units covered by one terminal column, for centring labels
    let column_width = CANVAS_EXTENT / area.width.saturating_sub(2).max(1) as f64;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_EXTENT])
        .y_bounds([0.0, CANVAS_EXTENT])
        .paint(|ctx| {
            for (index, pos) in positions.iter().enumerate().skip(1) {
                let parent = positions[(index - 1) / 2];
                ctx.draw(&CanvasLine {
                    x1: parent.x,
                    y1: y_of(parent.level),
                    x2: pos.x,
                    y2: y_of(pos.level),
                    color: DEFAULT_THEME.edge,
                });
            }

            ctx.layer();

            for (index, pos) in positions.iter().enumerate() {
                let label = format!("({})", view.heap[index]);
                let offset = label.chars().count() as f64 / 2.0 * column_width;
                let style = Style::default()
                    .fg(node_color(view.cell_state(index)))
                    .add_modifier(Modifier::BOLD);
                ctx.print(
                    (pos.x - offset).max(0.0),
                    y_of(pos.level),
                    Span::styled(label, style),
                );
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(level_of(0), 0);
        assert_eq!(level_of(1), 1);
        assert_eq!(level_of(2), 1);
        assert_eq!(level_of(3), 2);
        assert_eq!(level_of(6), 2);
        assert_eq!(level_of(7), 3);
        assert_eq!(tree_depth(0), 0);
        assert_eq!(tree_depth(7), 3);
        assert_eq!(tree_depth(8), 4);
    }

    #[test]
    fn test_positions_halve_segments() {
        let positions = tree_positions(7, 80.0);
        let xs: Vec<f64> = positions.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![40.0, 20.0, 60.0, 10.0, 30.0, 50.0, 70.0]);
        assert_eq!(positions[6].level, 2);
    }
}
