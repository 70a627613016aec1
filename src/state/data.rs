//! Application data fetched from the server.

use crate::balance::BalanceBoard;
use crate::domain::{ChainInfo, Transaction};

/// Data state - chain overview, pending pool, balances, mining progress.
#[derive(Debug, Default)]
pub struct DataState {
    /// Latest chain overview, `None` until the first successful fetch.
    pub chain: Option<ChainInfo>,
    /// Pending transaction pool.
    pub pending: Vec<Transaction>,
    /// Balance display slots for watched wallets.
    pub balances: BalanceBoard,
    /// Simulated mining progress percentage; `None` while idle.
    pub mining: Option<u8>,
    /// Whether the server answered the most recent probe.
    pub server_ok: bool,
}

impl DataState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks in the last fetched chain.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.chain.as_ref().map_or(0, ChainInfo::height)
    }

    /// Whether a mining animation is currently running.
    #[must_use]
    pub fn is_mining(&self) -> bool {
        self.mining.is_some()
    }
}
