//! Layout calculations for the TUI

use ratatui::prelude::*;

/// Layout areas for the UI
pub struct LayoutAreas {
    pub status: Rect,
    pub buttons: Rect,
    pub events: Rect,
    pub statusbar: Rect,
}

/// Calculate layout areas based on terminal size
pub fn calculate_layout(area: Rect) -> LayoutAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Status + spinner
            Constraint::Length(3), // Buttons
            Constraint::Min(3),    // Event log
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    LayoutAreas {
        status: vertical[0],
        buttons: vertical[1],
        events: vertical[2],
        statusbar: vertical[3],
    }
}
