//! Footer bar with keyboard shortcuts.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, _app: &App) {
    let footer_text =
        "q:Quit  ?:Help  r:Refresh  m:Mine  a:Add  d:Del  b:Balance  c:Copy  Space:Live  Tab:Focus";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
