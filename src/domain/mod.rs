//! Domain types shared across the client, state, and UI layers.

mod chain;
mod error;
mod wallet;

pub use chain::{Block, ChainInfo, Transaction};
pub use error::ChainError;
pub use wallet::WatchedWallet;
