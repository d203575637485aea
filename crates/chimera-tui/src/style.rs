//! TUI styles

use ratatui::style::{Color, Modifier, Style};

use crate::app::Activity;

/// Spinner frame for the current activity
pub fn activity_symbol(activity: Activity, tick: u64) -> &'static str {
    match activity {
        Activity::Idle => "●",
        Activity::Checking | Activity::Upgrading => match tick % 4 {
            0 => "◐",
            1 => "◓",
            2 => "◑",
            _ => "◒",
        },
    }
}

/// Activity color
pub fn activity_color(activity: Activity) -> Color {
    match activity {
        Activity::Idle => Color::Green,
        Activity::Checking => Color::Yellow,
        Activity::Upgrading => Color::Blue,
    }
}

/// Header style
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Focused button style
pub fn focused_button_style() -> Style {
    Style::default()
        .bg(Color::Cyan)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

/// Enabled button style
pub fn button_style() -> Style {
    Style::default().fg(Color::White)
}

/// Disabled button style
pub fn disabled_button_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Border style for the main frame
pub fn border_style() -> Style {
    Style::default().fg(Color::Cyan)
}
