use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub number: Color,
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub node_default: Color, // Indigo
    pub node_root: Color,    // Amber
    pub comparing: Color,
    pub swapping: Color,
    pub sorted: Color,
    pub edge: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    number: Color::Rgb(250, 179, 135), // Orange for numbers
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for bars
    node_default: Color::Rgb(99, 102, 241),
    node_root: Color::Rgb(251, 191, 36),
    comparing: Color::Rgb(248, 113, 113), // Red for comparisons
    swapping: Color::Rgb(251, 191, 36),   // Amber for swaps
    sorted: Color::Rgb(52, 211, 153),     // Green for sorted/removed
    edge: Color::Rgb(71, 85, 105),
};
