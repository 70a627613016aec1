//! Add-wallet input form popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::state::{WalletForm, WalletFormField};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

use super::super::helpers::{centered_popup_area, create_popup_block};

/// Renders the add-wallet form. The focused field gets a cursor marker.
pub fn render(frame: &mut Frame, area: Rect, form: &WalletForm) {
    let popup_area = centered_popup_area(area, 60, 8);

    frame.render_widget(Clear, popup_area);

    let block = create_popup_block("Add Wallet");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::raw(""),
        field_line("Address", &form.address, form.field == WalletFormField::Address),
        field_line("Label", &form.label, form.field == WalletFormField::Label),
        Line::raw(""),
        Line::styled(
            "  Tab:Switch field  Enter:Add  Esc:Cancel",
            Style::new().fg(MUTED_COLOR),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line<'a>(name: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(MUTED_COLOR)
    };

    let mut spans = vec![
        Span::styled(format!("  {name:>8}: "), label_style),
        Span::raw(value),
    ];
    if focused {
        spans.push(Span::styled("▌", Style::new().fg(PRIMARY_COLOR)));
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
