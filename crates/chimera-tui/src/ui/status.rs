//! Update status panel

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::style;

/// Render the status line and activity indicator
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let status_color = if app.status.starts_with("Error:") {
        Color::Red
    } else {
        Color::White
    };

    let activity = Line::from(vec![
        Span::styled(
            style::activity_symbol(app.activity, app.tick),
            Style::default().fg(style::activity_color(app.activity)),
        ),
        Span::raw(" "),
        Span::styled(
            format!("package manager: {}", app.manager_name()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let lines = vec![
        Line::raw(""),
        Line::styled(app.status.as_str(), Style::default().fg(status_color)),
        activity,
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
