//! Keyboard shortcut overview popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

use super::super::helpers::{centered_popup_area, create_popup_block};

const SHORTCUTS: &[(&str, &str)] = &[
    ("q", "Quit"),
    ("?", "Toggle this help"),
    ("Tab", "Cycle panel focus"),
    ("j / k", "Move selection"),
    ("r", "Refresh chain, pending pool and balances"),
    ("b / Enter", "Refresh selected wallet balance"),
    ("m", "Mine a block to the selected wallet"),
    ("a", "Watch a new wallet"),
    ("d", "Stop watching the selected wallet"),
    ("c", "Copy selected address to clipboard"),
    ("x", "Reset the chain (confirmation required)"),
    ("Space", "Toggle live updates"),
];

/// Renders the help popup listing all keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect) {
    let height = SHORTCUTS.len() as u16 + 4;
    let popup_area = centered_popup_area(area, 56, height);

    frame.render_widget(Clear, popup_area);

    let block = create_popup_block("Help");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = vec![Line::raw("")];
    for (key, description) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:>9}  "),
                Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*description, Style::new().fg(MUTED_COLOR)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Tests
// ============================================================================
