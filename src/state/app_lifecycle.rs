//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Background task management
//! - Initial data fetching

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::balance::BalanceRefresher;
use crate::client::ChainClient;
use crate::clipboard::ClipboardManager;
use crate::constants::{
    CHAIN_FETCH_INTERVAL, PENDING_FETCH_INTERVAL, SERVER_CHECK_INTERVAL, TICK_RATE,
};
use crate::domain::WatchedWallet;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, DataState, NavigationState, StartupOptions, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance from loaded configuration and startup
    /// options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(mut config: AppConfig, startup: StartupOptions) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (live_updates_tx, _live_updates_rx) = tokio::sync::watch::channel(config.show_live);

        if let Some(url) = startup.server_url {
            config.server_url = url;
        }
        if let Some(address) = startup.watch {
            config.add_wallet(WatchedWallet::new(address, None));
        }

        let client = ChainClient::new(&config.server_url).map_err(|e| e.into_report())?;
        let refresher = BalanceRefresher::new(client.clone(), message_tx.clone());

        let mut data = DataState::new();
        for wallet in &config.wallets {
            data.balances.watch(&wallet.address);
        }

        let show_live = config.show_live;
        // Watch channel sends: receivers subscribe later, ok if no subscribers yet
        let _ = live_updates_tx.send(show_live);

        Ok(Self {
            nav: NavigationState::new(),
            data,
            ui: UiState::new(),
            config,
            show_live,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            live_updates_tx,
            client,
            refresher,
            clipboard: ClipboardManager::new(),
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_background_tasks();
        self.initial_data_fetch();
        self.refresh_all_balances();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.data.balances.tick(Instant::now());
                self.ui.tick_toast();
                self.sync_selections();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        if let Err(err) = self.config.save() {
            tracing::warn!(error = %err, "failed to persist config on exit");
        }

        Ok(())
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    pub(super) fn start_background_tasks(&self) {
        let message_tx = self.message_tx.clone();
        let live_updates_rx = self.live_updates_tx.subscribe();
        let client = self.client.clone();

        tokio::spawn(async move {
            Self::data_fetching_task(message_tx, live_updates_rx, client).await;
        });
    }

    async fn data_fetching_task(
        message_tx: mpsc::UnboundedSender<AppMessage>,
        mut live_updates_rx: tokio::sync::watch::Receiver<bool>,
        client: ChainClient,
    ) {
        let mut chain_interval = interval(CHAIN_FETCH_INTERVAL);
        let mut pending_interval = interval(PENDING_FETCH_INTERVAL);
        let mut server_check_interval = interval(SERVER_CHECK_INTERVAL);

        let mut is_server_available = true;
        let mut server_error_shown = false;

        loop {
            tokio::select! {
                _ = live_updates_rx.changed() => {}

                _ = server_check_interval.tick() => {
                    if *live_updates_rx.borrow() {
                        match client.get_server_status().await {
                            Ok(()) => {
                                if !is_server_available {
                                    // Receiver may be dropped during shutdown - safe to ignore
                                    let _ = message_tx.send(AppMessage::ServerConnected);
                                }
                                is_server_available = true;
                                server_error_shown = false;
                            }
                            Err(error_msg) => {
                                if !server_error_shown {
                                    let _ = message_tx.send(AppMessage::ServerError(error_msg));
                                    server_error_shown = true;
                                }
                                is_server_available = false;
                            }
                        }
                    }
                }

                _ = chain_interval.tick() => {
                    if *live_updates_rx.borrow() && is_server_available {
                        match client.get_chain().await {
                            Ok(chain) => {
                                server_error_shown = false;
                                let _ = message_tx.send(AppMessage::ChainUpdated(chain));
                            }
                            Err(err) => {
                                if !server_error_shown {
                                    let _ = message_tx.send(AppMessage::ServerError(err.to_string()));
                                    server_error_shown = true;
                                }
                                is_server_available = false;
                            }
                        }
                    }
                }

                _ = pending_interval.tick() => {
                    if *live_updates_rx.borrow() && is_server_available {
                        match client.get_pending_transactions().await {
                            Ok(pending) => {
                                server_error_shown = false;
                                let _ = message_tx.send(AppMessage::PendingUpdated(pending));
                            }
                            Err(err) => {
                                if !server_error_shown {
                                    let _ = message_tx.send(AppMessage::ServerError(err.to_string()));
                                    server_error_shown = true;
                                }
                                is_server_available = false;
                            }
                        }
                    }
                }
            }
        }
    }

    pub(super) fn initial_data_fetch(&self) {
        let message_tx = self.message_tx.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            // Channel sends below: receiver may be dropped during shutdown - safe to ignore
            match client.get_server_status().await {
                Err(error_msg) => {
                    let _ = message_tx.send(AppMessage::ServerError(error_msg));
                    return;
                }
                Ok(()) => {
                    let _ = message_tx.send(AppMessage::ServerConnected);
                }
            }

            // Chain and pending pool in parallel
            let (chain_result, pending_result) =
                tokio::join!(client.get_chain(), client.get_pending_transactions());

            match chain_result {
                Ok(chain) => {
                    let _ = message_tx.send(AppMessage::ChainUpdated(chain));
                }
                Err(err) => {
                    let _ = message_tx.send(AppMessage::ServerError(err.to_string()));
                }
            }

            match pending_result {
                Ok(pending) => {
                    let _ = message_tx.send(AppMessage::PendingUpdated(pending));
                }
                Err(err) => {
                    let _ = message_tx.send(AppMessage::ServerError(err.to_string()));
                }
            }
        });
    }
}
