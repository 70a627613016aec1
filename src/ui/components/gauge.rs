//! Mining progress gauge overlay.
//!
//! Shown centered over the content while a mining animation is running. The
//! percentage comes from the simulated stepper, not from the server.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Clear, Gauge},
};

use crate::theme::PROGRESS_COLOR;

use super::super::helpers::{centered_popup_area, create_popup_block};

/// Width of the gauge popup.
const GAUGE_WIDTH: u16 = 50;

/// Height of the gauge popup including borders.
const GAUGE_HEIGHT: u16 = 3;

/// Renders the mining progress gauge centered in `area`.
pub fn render_mining_gauge(frame: &mut Frame, area: Rect, percent: u8) {
    let gauge_area = centered_popup_area(area, GAUGE_WIDTH, GAUGE_HEIGHT);

    frame.render_widget(Clear, gauge_area);

    let gauge = Gauge::default()
        .block(create_popup_block("Mining"))
        .gauge_style(Style::default().fg(PROGRESS_COLOR))
        .percent(u16::from(percent.min(100)))
        .label(format!("{}%", percent.min(100)));

    frame.render_widget(gauge, gauge_area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_gauge_renders_percentage_label() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| render_mining_gauge(frame, frame.area(), 42))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = (0..24)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();

        assert!(content.contains("Mining"));
        assert!(content.contains("42%"));
    }

    #[test]
    fn test_gauge_clamps_out_of_range_percent() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        // Must not panic on a percent above 100
        terminal
            .draw(|frame| render_mining_gauge(frame, frame.area(), 250))
            .unwrap();
    }
}
