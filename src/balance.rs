//! Balance display state and asynchronous refresh.
//!
//! Two pieces cooperate here:
//!
//! - [`BalanceBoard`] owns the per-address display slots: the formatted
//!   balance text plus a transient highlight that expires a fixed interval
//!   after the most recent successful reading. The board is plain owned
//!   state, injected wherever it is needed, so it can be exercised in tests
//!   without a network or a terminal.
//! - [`BalanceRefresher`] owns the in-flight fetch tasks, keyed by address.
//!   A new refresh for an address aborts and supersedes the previous
//!   in-flight request for that address, so at most one reading per address
//!   is ever outstanding and the last-issued request wins. Refreshes for
//!   distinct addresses are independent and unordered.
//!
//! Failures are observable: every failed fetch produces a
//! [`AppMessage::BalanceRefreshFailed`] on the app channel (plus a tracing
//! diagnostic) and leaves the previously displayed balance untouched.

use std::collections::HashMap;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::ChainClient;
use crate::constants::HIGHLIGHT_DURATION;
use crate::format::format_balance;
use crate::state::AppMessage;

// ============================================================================
// Balance Board
// ============================================================================

/// Display state for a single watched address.
#[derive(Debug, Clone)]
pub struct BalanceSlot {
    /// Formatted balance text, always two fractional digits once a reading
    /// has arrived.
    display: String,
    /// Deadline until which the slot renders highlighted. Re-armed by each
    /// successful reading; the latest reading's deadline wins.
    highlight_until: Option<Instant>,
}

impl BalanceSlot {
    fn empty() -> Self {
        Self {
            display: "--".to_string(),
            highlight_until: None,
        }
    }
}

/// The set of balance display slots, keyed by address.
#[derive(Debug, Default)]
pub struct BalanceBoard {
    slots: HashMap<String, BalanceSlot>,
}

impl BalanceBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a slot for an address. Idempotent; an existing slot keeps
    /// its current display text.
    pub fn watch(&mut self, address: &str) {
        self.slots
            .entry(address.to_string())
            .or_insert_with(BalanceSlot::empty);
    }

    /// Remove the slot for an address.
    pub fn unwatch(&mut self, address: &str) {
        self.slots.remove(address);
    }

    /// Apply a successful balance reading.
    ///
    /// Formats the value to exactly two decimal places, stores it as the
    /// slot's display text, and arms the transient highlight to expire
    /// `HIGHLIGHT_DURATION` after `now`. Readings for unknown addresses are
    /// dropped (the slot may have been unwatched while the fetch was in
    /// flight).
    pub fn apply_reading(&mut self, address: &str, balance: f64, now: Instant) {
        let Some(slot) = self.slots.get_mut(address) else {
            tracing::debug!(%address, "dropping balance reading for unwatched address");
            return;
        };

        slot.display = format_balance(balance);
        slot.highlight_until = Some(now + HIGHLIGHT_DURATION);
    }

    /// Clear highlights whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        for slot in self.slots.values_mut() {
            if slot.highlight_until.is_some_and(|until| now >= until) {
                slot.highlight_until = None;
            }
        }
    }

    /// The display text for an address, if watched.
    #[must_use]
    pub fn display(&self, address: &str) -> Option<&str> {
        self.slots.get(address).map(|slot| slot.display.as_str())
    }

    /// Whether the address's slot is currently highlighted.
    #[must_use]
    pub fn is_highlighted(&self, address: &str, now: Instant) -> bool {
        self.slots
            .get(address)
            .and_then(|slot| slot.highlight_until)
            .is_some_and(|until| now < until)
    }
}

// ============================================================================
// Balance Refresher
// ============================================================================

/// Spawns and tracks per-address balance fetch tasks.
#[derive(Debug)]
pub struct BalanceRefresher {
    client: ChainClient,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// In-flight fetch task per address. A new refresh aborts the old task.
    inflight: HashMap<String, JoinHandle<()>>,
}

impl BalanceRefresher {
    #[must_use]
    pub fn new(client: ChainClient, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            client,
            message_tx,
            inflight: HashMap::new(),
        }
    }

    /// Start an asynchronous balance refresh for one address.
    ///
    /// Returns immediately. The outcome arrives on the app message channel
    /// as `BalanceRefreshed` or `BalanceRefreshFailed`. If a refresh for
    /// the same address is still in flight it is aborted first, so the
    /// reading that eventually lands always belongs to the latest request.
    pub fn refresh(&mut self, address: &str) {
        if let Some(previous) = self.inflight.remove(address) {
            previous.abort();
        }

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        let address_owned = address.to_string();

        let handle = tokio::spawn(async move {
            match client.get_balance(&address_owned).await {
                Ok(balance) => {
                    // Receiver may be dropped during shutdown - safe to ignore
                    let _ = message_tx.send(AppMessage::BalanceRefreshed {
                        address: address_owned,
                        balance,
                    });
                }
                Err(err) => {
                    tracing::warn!(address = %address_owned, error = %err, "balance refresh failed");
                    let _ = message_tx.send(AppMessage::BalanceRefreshFailed {
                        address: address_owned,
                        error: err.to_string(),
                    });
                }
            }
        });

        self.inflight.insert(address.to_string(), handle);
        self.prune_finished();
    }

    /// Refresh every address in the iterator.
    pub fn refresh_all<'a>(&mut self, addresses: impl IntoIterator<Item = &'a str>) {
        for address in addresses {
            self.refresh(address);
        }
    }

    /// Swap the HTTP client (after a server-URL change). In-flight tasks
    /// keep their old client and are left to finish.
    pub fn set_client(&mut self, client: ChainClient) {
        self.client = client;
    }

    /// Drop handles of tasks that already completed.
    fn prune_finished(&mut self) {
        self.inflight.retain(|_, handle| !handle.is_finished());
    }

    /// Number of refreshes currently in flight (finished tasks may still be
    /// counted until the next prune).
    #[must_use]
    pub fn inflight_count(&self) -> usize {
        self.inflight.len()
    }
}

impl Drop for BalanceRefresher {
    fn drop(&mut self) {
        for handle in self.inflight.values() {
            handle.abort();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_apply_reading_formats_two_decimals() {
        let mut board = BalanceBoard::new();
        board.watch("addr-a");

        let t0 = Instant::now();
        board.apply_reading("addr-a", 12.345, t0);

        assert_eq!(board.display("addr-a"), Some("12.35"));
        assert!(board.is_highlighted("addr-a", t0));
    }

    #[test]
    fn test_highlight_expires_after_duration() {
        let mut board = BalanceBoard::new();
        board.watch("addr-a");

        let t0 = Instant::now();
        board.apply_reading("addr-a", 5.0, t0);

        // Just before the deadline the highlight is still on
        let almost = t0 + HIGHLIGHT_DURATION - Duration::from_millis(1);
        assert!(board.is_highlighted("addr-a", almost));

        // At the deadline it is off, and tick clears the stored deadline
        let expired = t0 + HIGHLIGHT_DURATION;
        assert!(!board.is_highlighted("addr-a", expired));
        board.tick(expired);
        assert!(!board.is_highlighted("addr-a", expired));

        // The display text survives highlight expiry
        assert_eq!(board.display("addr-a"), Some("5.00"));
    }

    #[test]
    fn test_unknown_address_reading_is_dropped() {
        let mut board = BalanceBoard::new();
        board.watch("addr-a");

        board.apply_reading("addr-b", 7.0, Instant::now());

        assert_eq!(board.display("addr-b"), None);
        assert_eq!(board.display("addr-a"), Some("--"));
    }

    #[test]
    fn test_overlapping_readings_last_wins() {
        let mut board = BalanceBoard::new();
        board.watch("addr-a");

        let t0 = Instant::now();
        board.apply_reading("addr-a", 1.0, t0);

        // Second reading arrives before the first highlight expires
        let t1 = t0 + Duration::from_millis(400);
        board.apply_reading("addr-a", 2.0, t1);

        assert_eq!(board.display("addr-a"), Some("2.00"));

        // The highlight deadline was re-armed from the second reading: still
        // on past the first deadline, off at the second one.
        assert!(board.is_highlighted("addr-a", t0 + HIGHLIGHT_DURATION));
        assert!(!board.is_highlighted("addr-a", t1 + HIGHLIGHT_DURATION));
    }

    #[test]
    fn test_unwatch_removes_slot() {
        let mut board = BalanceBoard::new();
        board.watch("addr-a");
        board.apply_reading("addr-a", 3.0, Instant::now());

        board.unwatch("addr-a");
        assert_eq!(board.display("addr-a"), None);
    }

    #[tokio::test]
    async fn test_failed_refresh_reports_error_and_leaves_board_unchanged() {
        // Port 9 (discard) is unroutable for HTTP; the fetch fails fast.
        let client = ChainClient::new("http://127.0.0.1:9").unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut refresher = BalanceRefresher::new(client, tx);

        let mut board = BalanceBoard::new();
        board.watch("addr-a");

        refresher.refresh("addr-a");

        // Exactly one failure message arrives for the address
        let message = rx.recv().await.expect("refresher should report outcome");
        match message {
            AppMessage::BalanceRefreshFailed { address, error } => {
                assert_eq!(address, "addr-a");
                assert!(!error.is_empty());
            }
            other => panic!("expected BalanceRefreshFailed, got {other:?}"),
        }

        // A failed refresh never touches the display
        assert_eq!(board.display("addr-a"), Some("--"));
        assert!(!board.is_highlighted("addr-a", Instant::now()));
    }

    #[tokio::test]
    async fn test_refresh_supersedes_inflight_request() {
        let client = ChainClient::new("http://127.0.0.1:9").unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut refresher = BalanceRefresher::new(client, tx);

        refresher.refresh("addr-a");
        refresher.refresh("addr-a");
        assert_eq!(refresher.inflight_count(), 1);

        // The superseding request still reports exactly one outcome
        let message = rx.recv().await.expect("second refresh should settle");
        assert!(matches!(
            message,
            AppMessage::BalanceRefreshFailed { ref address, .. } if address == "addr-a"
        ));
    }
}
