//! Help popup widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Render the help popup
pub fn render(frame: &mut Frame) {
    let help_text = r"
  Actions
  ───────
  c         Check for updates
  i         Install updates
  ←/→, Tab  Move between buttons
  Enter     Press focused button

  General
  ───────
  ?         Toggle help
  Esc       Close popup
  q         Quit (waits for a running upgrade)
";

    let popup_area = centered(frame.area(), 52, 16);

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

/// Centered rectangle of at most `width` x `height`
pub(super) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(x, y, popup_width, popup_height)
}
