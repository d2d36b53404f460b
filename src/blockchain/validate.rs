use sha2::{Digest, Sha256};

use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF, pow};

/// Canonical SHA-256 hex digest of a block's full content.
///
/// The block is serialized through `serde_json::Value`, whose object
/// map keeps keys sorted, so the encoding is deterministic and
/// independent of struct field order. Every field participates,
/// including the transaction list; this digest is what the next block
/// stores as `previous_hash`.
pub fn canonical_hash(block: &Block) -> String {
    let value = serde_json::to_value(block).expect("serialize block");
    let mut hasher = Sha256::new();
    hasher.update(value.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a whole chain: it must be non-empty, open with the fixed
/// genesis block, and every later block must link to its predecessor
/// and satisfy the puzzle. An invalid chain is a normal outcome,
/// never a panic.
pub fn is_chain_valid(chain: &[Block]) -> bool {
    let Some(genesis) = chain.first() else {
        return false;
    };
    if genesis.index != 1
        || genesis.proof != GENESIS_PROOF
        || genesis.previous_hash != GENESIS_PREVIOUS_HASH
    {
        return false;
    }
    for pair in chain.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.previous_hash != canonical_hash(previous) {
            return false;
        }
        if !pow::verify(current.proof, previous.proof) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{canonical_hash, is_chain_valid};
    use crate::blockchain::{Block, Blockchain, pow, validate};
    use crate::transaction::Transaction;

    fn mine_next(bc: &mut Blockchain) {
        let previous_proof = bc.last_block().proof;
        let proof = pow::solve(previous_proof);
        let previous_hash = validate::canonical_hash(bc.last_block());
        bc.create_block(proof, previous_hash);
    }

    #[test]
    fn canonical_hash_is_stable() {
        let block = Block::genesis();
        assert_eq!(canonical_hash(&block), canonical_hash(&block));
    }

    #[test]
    fn canonical_hash_covers_transactions() {
        let mut block = Block::genesis();
        let before = canonical_hash(&block);
        block.transactions.push(Transaction::new("Alice", "Bob", 5));
        assert_ne!(before, canonical_hash(&block));
    }

    #[test]
    fn freshly_mined_chain_is_valid() {
        let mut bc = Blockchain::new();
        for _ in 0..3 {
            mine_next(&mut bc);
        }
        assert_eq!(bc.len(), 4);
        assert!(is_chain_valid(bc.chain()));
    }

    #[test]
    fn tampered_proof_is_detected() {
        let mut bc = Blockchain::new();
        mine_next(&mut bc);
        let mut chain = bc.snapshot();
        chain[1].proof += 1;
        assert!(!is_chain_valid(&chain));
    }

    #[test]
    fn tampered_linkage_is_detected() {
        let mut bc = Blockchain::new();
        mine_next(&mut bc);
        mine_next(&mut bc);
        let mut chain = bc.snapshot();
        chain[1].previous_hash = "deadbeef".to_string();
        assert!(!is_chain_valid(&chain));
    }

    #[test]
    fn tampered_transaction_breaks_descendant_linkage() {
        let mut bc = Blockchain::new();
        bc.stage_transaction("Alice".into(), "Bob".into(), 5);
        mine_next(&mut bc);
        mine_next(&mut bc);
        let mut chain = bc.snapshot();
        chain[1].transactions[0].amount = 500;
        assert!(!is_chain_valid(&chain));
    }

    #[test]
    fn single_block_chain_is_valid() {
        assert!(is_chain_valid(&[Block::genesis()]));
    }

    #[test]
    fn empty_chain_is_invalid() {
        assert!(!is_chain_valid(&[]));
    }

    #[test]
    fn forged_genesis_is_rejected() {
        let mut genesis = Block::genesis();
        genesis.proof = 2;
        assert!(!is_chain_valid(&[genesis]));

        let mut genesis = Block::genesis();
        genesis.previous_hash = "1".to_string();
        assert!(!is_chain_valid(&[genesis]));

        let mut genesis = Block::genesis();
        genesis.index = 0;
        assert!(!is_chain_valid(&[genesis]));
    }
}
