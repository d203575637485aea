//! Status bar widget

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Activity, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let activity = match app.activity {
        Activity::Idle => ("● Ready", Color::Green),
        Activity::Checking => ("◐ Checking", Color::Yellow),
        Activity::Upgrading => ("◐ Upgrading", Color::Blue),
    };

    let keybindings = "[c] Check  [i] Install  [←/→] Select  [Enter] Press  [?] Help  [q] Quit";

    let status_line = Line::from(vec![
        Span::styled(activity.0, Style::default().fg(activity.1)),
        Span::raw("  │  "),
        Span::styled(keybindings, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}
