//! Main content panels: watched wallets, chain blocks, pending pool.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::constants::SHORT_HASH_LEN;
use crate::format::{format_timestamp, truncate_middle};
use crate::state::{App, Focus};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};

use super::helpers::create_border_block;

// ============================================================================
// Wallets Panel
// ============================================================================

/// Renders the watched wallets list with their balance displays.
///
/// A wallet whose balance was refreshed within the last second renders its
/// balance in the success color.
pub fn render_wallets(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.ui.focus == Focus::Wallets;
    let title = format!("Wallets ({})", app.config.wallets.len());
    let block = create_border_block(&title, focused);

    if app.config.wallets.is_empty() {
        let hint = Paragraph::new("No wallets watched. Press 'a' to add one.")
            .style(Style::new().fg(MUTED_COLOR))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let now = Instant::now();
    let items: Vec<ListItem> = app
        .config
        .wallets
        .iter()
        .map(|wallet| {
            let balance = app
                .data
                .balances
                .display(&wallet.address)
                .unwrap_or("--")
                .to_string();

            let balance_style = if app.data.balances.is_highlighted(&wallet.address, now) {
                Style::new().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD)
            } else {
                Style::new()
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(wallet.label.clone(), Style::new().fg(PRIMARY_COLOR)),
                    Span::raw("  "),
                    Span::styled(balance, balance_style),
                ]),
                Line::from(Span::styled(
                    truncate_middle(&wallet.address, SHORT_HASH_LEN * 2),
                    Style::new().fg(MUTED_COLOR),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::new().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.nav.wallet_index));
    frame.render_stateful_widget(list, area, &mut state);
}

// ============================================================================
// Blocks Panel
// ============================================================================

/// Renders the chain blocks, newest first.
pub fn render_blocks(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.ui.focus == Focus::Blocks;
    let title = format!("Blocks ({})", app.data.block_count());
    let block = create_border_block(&title, focused);

    let Some(chain) = &app.data.chain else {
        let hint = Paragraph::new("Waiting for chain data...")
            .style(Style::new().fg(MUTED_COLOR))
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let items: Vec<ListItem> = chain
        .blocks
        .iter()
        .rev()
        .map(|b| {
            let label = if b.is_genesis() {
                "genesis".to_string()
            } else {
                format!("{} tx", b.transactions.len())
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<4}", b.index), Style::new().fg(PRIMARY_COLOR)),
                Span::raw(truncate_middle(&b.hash, SHORT_HASH_LEN)),
                Span::raw("  "),
                Span::styled(label, Style::new().fg(MUTED_COLOR)),
                Span::raw("  "),
                Span::styled(
                    format!("nonce {}", b.nonce),
                    Style::new().fg(MUTED_COLOR),
                ),
                Span::raw("  "),
                Span::styled(format_timestamp(b.timestamp), Style::new().fg(MUTED_COLOR)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::new().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.nav.block_index));
    frame.render_stateful_widget(list, area, &mut state);
}

// ============================================================================
// Pending Pool Panel
// ============================================================================

/// Renders the pending transaction pool.
pub fn render_pending(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.ui.focus == Focus::Pending;
    let title = format!("Pending ({})", app.data.pending.len());
    let block = create_border_block(&title, focused);

    if app.data.pending.is_empty() {
        let hint = Paragraph::new("No pending transactions")
            .style(Style::new().fg(MUTED_COLOR))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .data
        .pending
        .iter()
        .map(|tx| {
            let from = tx
                .from
                .as_deref()
                .map_or_else(|| "(reward)".to_string(), |f| truncate_middle(f, 12));

            ListItem::new(Line::from(vec![
                Span::styled(from, Style::new().fg(MUTED_COLOR)),
                Span::raw(" → "),
                Span::raw(truncate_middle(&tx.to, 12)),
                Span::raw("  "),
                Span::styled(
                    format!("{:.2}", tx.amount),
                    Style::new().fg(PRIMARY_COLOR),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::new().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.nav.pending_offset));
    frame.render_stateful_widget(list, area, &mut state);
}
