pub mod block;
pub mod model;
pub mod pow;
pub mod validate;

pub use block::Block;
pub use model::Blockchain;

/// Required hex prefix of the puzzle digest (four leading zeros).
pub const POW_PREFIX: &str = "0000";

/// Proof carried by the genesis block on every node.
pub const GENESIS_PROOF: u64 = 1;

/// Linkage value of the genesis block (no predecessor).
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Fixed credit paid to the block producer on every mined block.
pub const BLOCK_REWARD: i64 = 10;
