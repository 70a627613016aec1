//! User-triggered actions: mining, balance refreshes, wallet management,
//! clipboard, chain reset.

use crate::constants::TOAST_TICKS;
use crate::domain::WatchedWallet;
use crate::progress::{ChannelReporter, SimulatedStepper};
use std::time::Duration;

use super::{App, AppMessage, WalletForm};

impl App {
    // ========================================================================
    // Data Refresh
    // ========================================================================

    /// Fire a one-shot chain and pending-pool fetch.
    pub(super) fn request_data_refresh(&self) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            // Receiver may be dropped during shutdown - safe to ignore
            match client.get_chain().await {
                Ok(chain) => {
                    let _ = message_tx.send(AppMessage::ChainUpdated(chain));
                }
                Err(err) => {
                    let _ = message_tx.send(AppMessage::ServerError(err.to_string()));
                }
            }

            match client.get_pending_transactions().await {
                Ok(pending) => {
                    let _ = message_tx.send(AppMessage::PendingUpdated(pending));
                }
                Err(err) => {
                    let _ = message_tx.send(AppMessage::ServerError(err.to_string()));
                }
            }
        });
    }

    /// Refresh the balance of every watched wallet.
    pub(super) fn refresh_all_balances(&mut self) {
        let addresses: Vec<String> = self
            .config
            .wallets
            .iter()
            .map(|w| w.address.clone())
            .collect();
        self.refresher
            .refresh_all(addresses.iter().map(String::as_str));
    }

    /// Refresh the balance of the currently selected wallet.
    pub(super) fn refresh_selected_balance(&mut self) {
        let Some(address) = self.selected_wallet().map(|w| w.address.clone()) else {
            self.ui.show_toast("[x] No wallet selected", TOAST_TICKS);
            return;
        };
        self.refresher.refresh(&address);
    }

    // ========================================================================
    // Mining
    // ========================================================================

    /// Kick off a mine request plus the simulated progress animation.
    ///
    /// No-op while an animation is already running; requires a selected
    /// wallet to receive the mining reward.
    pub(super) fn start_mining(&mut self) {
        if self.data.is_mining() {
            return;
        }

        let Some(miner) = self.selected_wallet().map(|w| w.address.clone()) else {
            self.ui
                .show_toast("[x] Select a wallet to mine to", TOAST_TICKS);
            return;
        };

        self.data.mining = Some(0);

        // Channel sends below: receiver may be dropped during shutdown - safe to ignore
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = client
                .mine_block(&miner)
                .await
                .map_err(|err| err.to_string());
            let _ = message_tx.send(AppMessage::MineRequestSettled(result));
        });

        // The animation runs independently of the request and always takes
        // the same fixed duration.
        let stepper = SimulatedStepper::new(
            Duration::from_millis(self.config.progress.tick_ms),
            self.config.progress.step,
        );
        let reporter = ChannelReporter::new(self.message_tx.clone());
        tokio::spawn(async move {
            stepper.drive(reporter).await;
        });
    }

    // ========================================================================
    // Chain Reset
    // ========================================================================

    /// Fire the chain reset request. Outcome lands as `ResetRequestSettled`.
    pub(super) fn execute_reset(&self) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            let result = client.reset_chain().await.map_err(|err| err.to_string());
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::ResetRequestSettled(result));
        });
    }

    // ========================================================================
    // Wallet Management
    // ========================================================================

    /// Add the wallet described by the completed add-wallet form.
    pub(super) fn submit_wallet_form(&mut self, form: &WalletForm) {
        let address = form.address.trim();
        if address.is_empty() {
            self.ui.show_toast("[x] Address is required", TOAST_TICKS);
            return;
        }

        let label = match form.label.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };
        let wallet = WatchedWallet::new(address, label);
        let address = wallet.address.clone();

        if !self.config.add_wallet(wallet) {
            self.ui
                .show_toast("[x] Address already watched", TOAST_TICKS);
            return;
        }

        self.data.balances.watch(&address);
        self.refresher.refresh(&address);
        // Persisted with the rest of the config on exit
        self.ui.show_toast("[+] Wallet added", TOAST_TICKS);
    }

    /// Remove the watched wallet at `index`.
    pub(super) fn remove_wallet_at(&mut self, index: usize) {
        let Some(removed) = self.config.remove_wallet(index) else {
            return;
        };

        self.data.balances.unwatch(&removed.address);
        self.sync_selections();
        self.ui
            .show_toast(format!("[+] Removed {}", removed.label), TOAST_TICKS);
    }

    // ========================================================================
    // Misc
    // ========================================================================

    /// Toggle live background updates and notify the fetch task.
    pub(super) fn toggle_live_updates(&mut self) {
        self.show_live = !self.show_live;
        self.config.show_live = self.show_live;
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = self.live_updates_tx.send(self.show_live);

        let label = if self.show_live {
            "[+] Live updates on"
        } else {
            "[+] Live updates off"
        };
        self.ui.show_toast(label, TOAST_TICKS);
    }

    /// Copy the selected wallet's address to the system clipboard.
    pub(super) fn copy_selected_address(&mut self) {
        let Some(address) = self.selected_wallet().map(|w| w.address.clone()) else {
            self.ui.show_toast("[x] No wallet selected", TOAST_TICKS);
            return;
        };

        match self.clipboard.copy(&address) {
            Ok(()) => {
                self.ui
                    .show_toast("[+] Address copied to clipboard", TOAST_TICKS);
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                self.ui
                    .show_toast(format!("[x] Copy failed: {err}"), TOAST_TICKS);
            }
        }
    }
}
