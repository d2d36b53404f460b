use std::mem;

use super::Block;
use crate::transaction::Transaction;

/// In-memory ledger: the append-only block sequence plus the pool of
/// transactions staged for the next mined block.
#[derive(Debug)]
pub struct Blockchain {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
}

impl Blockchain {
    /// Initialize a new ledger with its genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
            pending: Vec::new(),
        }
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("chain always holds at least the genesis block")
    }

    /// Stage a transaction for inclusion in the next mined block.
    /// Returns the index that block will carry.
    pub fn stage_transaction(&mut self, sender: String, receiver: String, amount: i64) -> u64 {
        self.pending.push(Transaction::new(sender, receiver, amount));
        self.last_block().index + 1
    }

    /// Append a new block carrying every pending transaction.
    ///
    /// The pool is drained wholesale into the block and left empty in
    /// the same step, so transactions are never partially flushed.
    pub fn create_block(&mut self, proof: u64, previous_hash: String) -> &Block {
        let transactions = mem::take(&mut self.pending);
        let block = Block::new(
            self.last_block().index + 1,
            proof,
            previous_hash,
            transactions,
        );
        self.chain.push(block);
        self.last_block()
    }

    /// Read-only view of the full chain.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Owned copy of the full chain.
    pub fn snapshot(&self) -> Vec<Block> {
        self.chain.clone()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Number of transactions waiting for the next block.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Wholesale replacement of the chain, used after a longer valid
    /// chain has been adopted from a peer.
    pub fn replace_chain(&mut self, new_chain: Vec<Block>) {
        self.chain = new_chain;
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}
