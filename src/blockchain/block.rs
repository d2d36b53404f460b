use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::transaction::Transaction;

/// A single block in the chain.
///
/// The timestamp is a Unix timestamp (UTC) recorded at creation; it is
/// opaque to validation. Linkage to the predecessor happens through
/// `previous_hash`, which holds the predecessor's canonical hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64,
    pub proof: u64,
    pub previous_hash: String,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create the genesis block (first block in every chain).
    pub fn genesis() -> Self {
        Self::new(1, GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string(), Vec::new())
    }

    /// Create a block with a fresh timestamp.
    pub fn new(
        index: u64,
        proof: u64,
        previous_hash: String,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp(),
            proof,
            previous_hash,
            transactions,
        }
    }
}
