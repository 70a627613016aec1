//! Generic yes/no confirmation popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

use super::super::helpers::{centered_popup_area, create_popup_block};

/// Renders a confirmation popup with the given title and question.
pub fn render(frame: &mut Frame, area: Rect, title: &str, question: &str) {
    let width = (question.len() as u16 + 6).clamp(30, area.width.saturating_sub(4).max(30));
    let popup_area = centered_popup_area(area, width, 6);

    frame.render_widget(Clear, popup_area);

    let block = create_popup_block(title);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::raw(question)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("y", Style::new().fg(PRIMARY_COLOR)),
            Span::styled("es / ", Style::new().fg(MUTED_COLOR)),
            Span::styled("n", Style::new().fg(PRIMARY_COLOR)),
            Span::styled("o", Style::new().fg(MUTED_COLOR)),
        ]),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(body, inner);
}

// ============================================================================
// Tests
// ============================================================================
