//! UI rendering modules

mod buttons;
pub mod dialog;
mod events;
mod help;
mod layout;
mod status;
mod statusbar;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use crate::app::App;
use crate::style;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let outer = Block::default()
        .title(Line::styled(" Chimera Update ", style::header_style()))
        .borders(Borders::ALL)
        .border_style(style::border_style());
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let areas = layout::calculate_layout(inner);

    status::render(frame, app, areas.status);
    buttons::render(frame, app, areas.buttons);
    events::render(frame, app, areas.events);
    statusbar::render(frame, app, areas.statusbar);

    if app.show_help {
        help::render(frame);
    }
}
