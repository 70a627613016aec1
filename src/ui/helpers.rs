//! Shared helpers for styled blocks and popup placement.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_COLOR, FOCUSED_BORDER_COLOR};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// A bordered panel block whose styling reflects focus.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, display_title) = if focused {
        (
            Style::new()
                .fg(FOCUSED_BORDER_COLOR)
                .add_modifier(Modifier::BOLD),
            border::DOUBLE,
            format!(" ● {title} "),
        )
    } else {
        (
            Style::new().fg(BORDER_COLOR),
            border::ROUNDED,
            format!(" {title} "),
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .border_set(border_set)
        .border_style(border_style)
}

/// A rounded block with a centered title for popup overlays.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::new().fg(BORDER_COLOR))
}

// ============================================================================
// Popup Placement
// ============================================================================

/// A centered rect of at most `width` x `height`, clamped to `area`.
#[must_use]
pub fn centered_popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_centered_popup_area_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);

        let popup = centered_popup_area(area, 60, 10);
        assert_eq!(popup, Rect::new(20, 15, 60, 10));

        // Oversized requests are clamped to the containing area
        let clamped = centered_popup_area(area, 200, 80);
        assert_eq!(clamped, Rect::new(0, 0, 100, 40));
    }

    #[test]
    fn test_block_helpers_render_without_panic() {
        let backend = TestBackend::new(40, 9);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                let area = frame.area();
                let top = Rect::new(0, 0, area.width, 3);
                let mid = Rect::new(0, 3, area.width, 3);
                let bottom = Rect::new(0, 6, area.width, 3);

                frame.render_widget(create_border_block("Focused", true), top);
                frame.render_widget(create_border_block("Unfocused", false), mid);
                frame.render_widget(create_popup_block("Popup"), bottom);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..40).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(row.contains("Focused"));
    }
}
