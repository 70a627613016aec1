//! Informational message popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;

use super::super::helpers::{centered_popup_area, create_popup_block};

/// Renders a dismissable message popup.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_popup_area(area, 60, 7);

    frame.render_widget(Clear, popup_area);

    let block = create_popup_block("Message");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(message),
        Line::raw(""),
        Line::styled("Press Esc to dismiss", Style::new().fg(MUTED_COLOR)),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(body, inner);
}
