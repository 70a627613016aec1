//! Message processing from background tasks.
//!
//! The main loop drains the app channel once per tick and applies each
//! message to the state. Everything here is synchronous; the async work
//! already happened in the task that sent the message.

use std::time::Instant;

use crate::constants::TOAST_TICKS;

use super::{App, AppMessage};

impl App {
    /// Drain and apply all pending messages from background tasks.
    pub(super) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ChainUpdated(chain) => {
                self.data.chain = Some(chain);
                self.data.server_ok = true;
            }

            AppMessage::PendingUpdated(pending) => {
                self.data.pending = pending;
            }

            AppMessage::BalanceRefreshed { address, balance } => {
                self.data
                    .balances
                    .apply_reading(&address, balance, Instant::now());
            }

            AppMessage::BalanceRefreshFailed { address, error } => {
                tracing::debug!(%address, %error, "balance refresh failure surfaced");
                self.ui
                    .show_toast(format!("[x] Balance fetch failed: {address}"), TOAST_TICKS);
            }

            AppMessage::MiningProgress(percent) => {
                self.data.mining = Some(percent);
            }

            AppMessage::MiningAnimationDone => {
                self.data.mining = None;
                self.ui.show_toast("[+] Block mined", TOAST_TICKS);
                // The chain grew; pick up the new block and reward balances
                self.request_data_refresh();
                self.refresh_all_balances();
            }

            AppMessage::MineRequestSettled(result) => match result {
                Ok(()) => tracing::debug!("mine request accepted by server"),
                Err(error) => {
                    self.ui
                        .show_toast(format!("[x] Mining failed: {error}"), TOAST_TICKS);
                }
            },

            AppMessage::ResetRequestSettled(result) => match result {
                Ok(()) => {
                    self.ui.show_toast("[+] Chain reset", TOAST_TICKS);
                    self.request_data_refresh();
                    self.refresh_all_balances();
                }
                Err(error) => {
                    self.ui
                        .show_toast(format!("[x] Reset failed: {error}"), TOAST_TICKS);
                }
            },

            AppMessage::ServerError(error) => {
                self.data.server_ok = false;
                self.ui
                    .show_toast(format!("[x] Server error: {error}"), TOAST_TICKS);
            }

            AppMessage::ServerConnected => {
                self.data.server_ok = true;
            }
        }
    }
}
