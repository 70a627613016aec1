//! Selection and scroll state for the main panels.

/// Cursor positions for the wallet, block, and pending-transaction lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationState {
    /// Selected row in the wallets panel.
    pub wallet_index: usize,
    /// Selected row in the blocks panel (0 = newest block).
    pub block_index: usize,
    /// Scroll offset in the pending transactions panel.
    pub pending_offset: usize,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp all cursors against current list lengths (after data changes).
    pub fn clamp(&mut self, wallet_count: usize, block_count: usize, pending_count: usize) {
        self.wallet_index = self.wallet_index.min(wallet_count.saturating_sub(1));
        self.block_index = self.block_index.min(block_count.saturating_sub(1));
        self.pending_offset = self.pending_offset.min(pending_count.saturating_sub(1));
    }
}
