//! Watched wallet entries.

use serde::{Deserialize, Serialize};

/// An address the user watches balances for.
///
/// The client never holds private keys; a watched wallet is only an
/// address plus a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedWallet {
    /// Wallet address (opaque to the client; validation is the server's
    /// concern).
    pub address: String,
    /// User-facing label.
    pub label: String,
}

impl WatchedWallet {
    /// Create a watched wallet, deriving a label when none is given.
    #[must_use]
    pub fn new(address: impl Into<String>, label: Option<String>) -> Self {
        let address = address.into();
        let label = label
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| format!("Wallet {}", short_label(&address)));
        Self { address, label }
    }
}

fn short_label(address: &str) -> String {
    address.chars().take(8).collect()
}
