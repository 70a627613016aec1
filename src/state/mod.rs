//! State management module for the chainview TUI application.
//!
//! This module provides a decomposed state architecture, separating
//! concerns into:
//!
//! - [`NavigationState`] - list selections and scroll positions
//! - [`DataState`] - fetched chain data, balances, mining progress
//! - [`UiState`] - presentation concerns (focus, popups, toasts)
//! - [`AppConfig`] - persistent configuration with load/save capabilities
//!
//! Background tasks communicate with the main loop through an unbounded
//! channel of [`AppMessage`] values; the main loop drains the channel once
//! per tick and applies the results to the state.

use tokio::sync::{mpsc, watch};

use crate::balance::BalanceRefresher;
use crate::client::ChainClient;
use crate::clipboard::ClipboardManager;
use crate::domain::{ChainInfo, Transaction, WatchedWallet};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_actions;
mod app_commands;
mod app_lifecycle;
mod app_messages;

pub mod config;
pub mod data;
pub mod navigation;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::DataState;
pub use navigation::NavigationState;
pub use ui_state::{Focus, PopupState, UiState, WalletForm, WalletFormField};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent between async tasks and the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// New chain overview fetched from the server.
    ChainUpdated(ChainInfo),
    /// Pending transaction pool fetched from the server.
    PendingUpdated(Vec<Transaction>),
    /// A balance refresh completed successfully.
    BalanceRefreshed { address: String, balance: f64 },
    /// A balance refresh failed; the previous display is kept.
    BalanceRefreshFailed { address: String, error: String },
    /// Simulated mining progress advanced to the given percentage.
    MiningProgress(u8),
    /// The mining progress animation ran to completion.
    MiningAnimationDone,
    /// The mine request settled (independently of the animation).
    MineRequestSettled(Result<(), String>),
    /// The chain reset request settled.
    ResetRequestSettled(Result<(), String>),
    /// The server became unreachable or answered with an error.
    ServerError(String),
    /// Server connection (re-)established.
    ServerConnected,
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Server base URL override (takes precedence over config).
    pub server_url: Option<String>,
    /// Address to add to the watch list on startup.
    pub watch: Option<String>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// Holds the decomposed sub-states, the HTTP client, the balance
/// refresher, and the async communication channels.
#[derive(Debug)]
pub struct App {
    /// Navigation state - selections, scroll positions.
    pub nav: NavigationState,

    /// Data state - chain, pending pool, balances, mining progress.
    pub data: DataState,

    /// UI state - focus, popups, toasts.
    pub ui: UiState,

    /// Persistent configuration.
    pub config: AppConfig,

    /// Whether live updates are enabled.
    pub show_live: bool,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // NOTE: Channel sends use `let _ = tx.send(...)` throughout this module.
    // This is intentional fire-and-forget: receivers may be dropped during
    // shutdown, and we don't want to propagate those errors.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Watch channel for the live updates toggle.
    pub(crate) live_updates_tx: watch::Sender<bool>,

    /// Chain client for server requests.
    pub(crate) client: ChainClient,

    /// Per-address balance refresh tasks.
    pub(crate) refresher: BalanceRefresher,

    /// Clipboard access for copying addresses.
    pub(crate) clipboard: ClipboardManager,
}

impl App {
    /// The currently selected watched wallet, if any.
    #[must_use]
    pub fn selected_wallet(&self) -> Option<&WatchedWallet> {
        self.config.wallets.get(self.nav.wallet_index)
    }

    /// Clamp navigation cursors against the current data.
    pub(crate) fn sync_selections(&mut self) {
        self.nav.clamp(
            self.config.wallets.len(),
            self.data.block_count(),
            self.data.pending.len(),
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
