//! Domain types for chain data returned by the blockchain server.
//!
//! The server serializes its in-memory chain as plain JSON dictionaries;
//! these types mirror that shape and parse defensively, substituting
//! defaults for missing fields rather than failing on partial data.

use serde_json::Value;

// ============================================================================
// Transaction
// ============================================================================

/// A single transaction as serialized by the server.
///
/// `from` is `None` for mining reward transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Sender address, or `None` for a mining reward.
    pub from: Option<String>,
    /// Recipient address.
    pub to: String,
    /// Transferred amount.
    pub amount: f64,
    /// Unix timestamp (seconds, possibly fractional).
    pub timestamp: f64,
    /// Signature hex, absent on reward transactions.
    pub signature: Option<String>,
}

impl Transaction {
    /// Parse a transaction from its JSON representation.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            from: value["from"].as_str().map(String::from),
            to: value["to"].as_str().unwrap_or("").to_string(),
            amount: value["amount"].as_f64().unwrap_or(0.0),
            timestamp: value["timestamp"].as_f64().unwrap_or(0.0),
            signature: value["signature"].as_str().map(String::from),
        }
    }

    /// Whether this transaction is a mining reward (no sender).
    #[must_use]
    pub fn is_reward(&self) -> bool {
        self.from.is_none()
    }
}

// ============================================================================
// Block
// ============================================================================

/// A mined block.
///
/// The server does not serialize a block index; it is derived from the
/// block's position in the chain array.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Position in the chain (0 = genesis).
    pub index: usize,
    /// Block hash.
    pub hash: String,
    /// Hash of the previous block ("0" for genesis).
    pub previous_hash: String,
    /// Proof-of-work nonce.
    pub nonce: u64,
    /// Unix timestamp at block creation.
    pub timestamp: f64,
    /// Transactions included in the block.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Parse a block from its JSON representation at the given chain index.
    #[must_use]
    pub fn from_value(value: &Value, index: usize) -> Self {
        let transactions = value["transactions"]
            .as_array()
            .map(|txs| txs.iter().map(Transaction::from_value).collect())
            .unwrap_or_default();

        Self {
            index,
            hash: value["hash"].as_str().unwrap_or("").to_string(),
            previous_hash: value["previous_hash"].as_str().unwrap_or("").to_string(),
            nonce: value["nonce"].as_u64().unwrap_or(0),
            timestamp: value["timestamp"].as_f64().unwrap_or(0.0),
            transactions,
        }
    }

    /// Whether this is the genesis block.
    #[must_use]
    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }
}

// ============================================================================
// Chain Overview
// ============================================================================

/// The full chain state as returned by the chain API endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChainInfo {
    /// All blocks, genesis first.
    pub blocks: Vec<Block>,
    /// Proof-of-work difficulty (leading zero count).
    pub difficulty: u64,
    /// Reward credited per mined block.
    pub mining_reward: f64,
    /// Transactions waiting to be mined.
    pub pending: Vec<Transaction>,
}

impl ChainInfo {
    /// Parse a chain overview from the server's JSON representation.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let blocks = value["chain"]
            .as_array()
            .map(|chain| {
                chain
                    .iter()
                    .enumerate()
                    .map(|(index, block)| Block::from_value(block, index))
                    .collect()
            })
            .unwrap_or_default();

        let pending = value["pending_transactions"]
            .as_array()
            .map(|txs| txs.iter().map(Transaction::from_value).collect())
            .unwrap_or_default();

        Self {
            blocks,
            difficulty: value["difficulty"].as_u64().unwrap_or(0),
            mining_reward: value["mining_reward"].as_f64().unwrap_or(0.0),
            pending,
        }
    }

    /// Total number of blocks in the chain.
    #[must_use]
    pub fn height(&self) -> usize {
        self.blocks.len()
    }

    /// The most recently mined block, if any.
    #[must_use]
    pub fn latest_block(&self) -> Option<&Block> {
        self.blocks.last()
    }
}

// ============================================================================
// Tests
// ============================================================================
