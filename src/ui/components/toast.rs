//! Toast notification overlay.
//!
//! A non-blocking box in the bottom-right corner. The text color follows the
//! message prefix: `[+]` renders green, `[x]` renders red, anything else
//! white.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{BORDER_COLOR, ERROR_COLOR, SUCCESS_COLOR};

/// Minimum toast width.
const MIN_TOAST_WIDTH: u16 = 20;

/// Toast height including borders.
const TOAST_HEIGHT: u16 = 3;

/// Padding from the right and bottom screen edges.
const TOAST_PADDING: u16 = 2;

/// Extra width for borders and spacing around the message.
const TOAST_WIDTH_PADDING: u16 = 4;

/// Renders a toast notification in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(BORDER_COLOR))
        .style(Style::default().bg(Color::Black));
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(message_color(message)))
        .alignment(Alignment::Center);

    frame.render_widget(toast_text, inner_area);
}

fn toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16;
    let toast_width = (message_len + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING);
    let toast_y = area.y + area.height.saturating_sub(TOAST_HEIGHT + TOAST_PADDING);

    Rect::new(toast_x, toast_y, toast_width, TOAST_HEIGHT)
}

fn message_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_color_follows_prefix() {
        struct TestCase {
            message: &'static str,
            expected: Color,
        }

        let cases = [
            TestCase {
                message: "[+] Block mined",
                expected: SUCCESS_COLOR,
            },
            TestCase {
                message: "[x] Mining failed: timeout",
                expected: ERROR_COLOR,
            },
            TestCase {
                message: "plain info",
                expected: Color::White,
            },
        ];

        for case in &cases {
            assert_eq!(
                message_color(case.message),
                case.expected,
                "message: '{}'",
                case.message
            );
        }
    }

    #[test]
    fn test_toast_position_stays_in_bounds() {
        let area = Rect::new(0, 0, 100, 40);
        let toast = toast_position(area, "[+] Wallet added");

        assert_eq!(toast.height, TOAST_HEIGHT);
        assert!(toast.width >= MIN_TOAST_WIDTH);
        assert!(toast.x + toast.width <= area.width);
        assert!(toast.y + toast.height <= area.height);

        // Long messages are capped at half the screen width
        let long = toast_position(area, &"x".repeat(200));
        assert_eq!(long.width, area.width / 2);
    }

    #[test]
    fn test_toast_position_tiny_area_does_not_underflow() {
        let area = Rect::new(0, 0, 10, 2);
        let toast = toast_position(area, "hi");
        assert!(toast.x <= area.width);
        assert!(toast.y <= area.height);
    }
}
