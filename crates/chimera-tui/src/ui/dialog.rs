//! Modal error dialog shown when startup fails

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::help::centered;

/// Render an error dialog with an OK prompt
pub fn render_error(frame: &mut Frame, message: &str) {
    let area = centered(frame.area(), 60, 9);

    frame.render_widget(Clear, area);

    let text = vec![
        Line::raw(""),
        Line::styled(message, Style::default().fg(Color::White)),
        Line::raw(""),
        Line::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
