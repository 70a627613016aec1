//! UI rendering for the chainview TUI.
//!
//! The main entry point is [`render`]; it lays out the header, the three
//! content panels (wallets, blocks, pending pool), the footer, and draws
//! popup overlays and toasts on top.

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod panels;
pub mod popups;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::state::{App, PopupState};

/// Height of the header bar including its border.
const HEADER_HEIGHT: u16 = 3;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Render the whole frame from the current application state.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    header::render(frame, chunks[0], app);
    render_main_content(app, frame, chunks[1]);
    footer::render(frame, chunks[2], app);

    render_popups(app, frame, size);

    if app.data.is_mining() {
        components::render_mining_gauge(frame, size, app.data.mining.unwrap_or(0));
    }

    // Toast goes on top of everything (non-blocking overlay)
    if let Some(message) = app.ui.toast_message() {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

/// Wallets on the left, blocks and pending pool stacked on the right.
fn render_main_content(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(area);

    panels::render_wallets(app, frame, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    panels::render_blocks(app, frame, rows[0]);
    panels::render_pending(app, frame, rows[1]);
}

fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ui.popup_state {
        PopupState::Help => popups::help::render(frame, area),
        PopupState::ConfirmQuit => {
            popups::confirm::render(frame, area, "Quit", "Quit chainview?");
        }
        PopupState::ConfirmReset => {
            popups::confirm::render(
                frame,
                area,
                "Reset Chain",
                "Reset the blockchain to its genesis state?",
            );
        }
        PopupState::ConfirmRemoveWallet(index) => {
            let label = app
                .config
                .wallets
                .get(*index)
                .map_or("this wallet", |w| w.label.as_str());
            popups::confirm::render(
                frame,
                area,
                "Remove Wallet",
                &format!("Stop watching {label}?"),
            );
        }
        PopupState::AddWallet(form) => popups::wallet_form::render(frame, area, form),
        PopupState::Message(message) => popups::message::render(frame, area, message),
        PopupState::None => {}
    }
}
