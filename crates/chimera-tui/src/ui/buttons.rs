//! Button row

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Button};
use crate::style;

/// Render the check / install / quit buttons
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (button, column) in Button::ALL.into_iter().zip(columns.iter()) {
        let style = if !app.is_enabled(button) {
            style::disabled_button_style()
        } else if app.focused == button {
            style::focused_button_style()
        } else {
            style::button_style()
        };

        let widget = Paragraph::new(button.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(widget, *column);
    }
}
