//! Header bar: title, server URL, connection state, live-updates toggle.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::format::format_with_commas;
use crate::state::App;
use crate::theme::{BORDER_COLOR, ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};

/// Renders the header bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (status_text, status_color) = if app.data.server_ok {
        ("● online", SUCCESS_COLOR)
    } else {
        ("● offline", ERROR_COLOR)
    };

    let live_text = if app.show_live { "live" } else { "paused" };

    let mut spans = vec![
        Span::styled(
            " chainview ",
            Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::new().fg(MUTED_COLOR)),
        Span::styled(app.config.server_url.as_str(), Style::new().fg(MUTED_COLOR)),
        Span::raw("  "),
        Span::styled(status_text, Style::new().fg(status_color)),
        Span::raw("  "),
        Span::styled(live_text, Style::new().fg(MUTED_COLOR)),
    ];

    if let Some(chain) = &app.data.chain {
        spans.push(Span::styled("  │ ", Style::new().fg(MUTED_COLOR)));
        spans.push(Span::raw(format!(
            "height {}  difficulty {}  reward {:.2}",
            format_with_commas(chain.height() as u64),
            chain.difficulty,
            chain.mining_reward,
        )));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(BORDER_COLOR)),
    );

    frame.render_widget(header, area);
}
