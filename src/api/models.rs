use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::blockchain::{Block, Blockchain};
use crate::node::{HttpPeerClient, PeerRegistry};
use crate::transaction::Transaction;

/// Shared application state: the in-memory ledger, the peer registry
/// and this node's mining identity. The chain lives only in process
/// memory and is lost on restart.
pub struct AppState {
    pub ledger: Mutex<Blockchain>,
    pub peers: Mutex<PeerRegistry>,
    pub peer_client: HttpPeerClient,
    /// Sender of the per-block producer credit.
    pub node_id: String,
    /// Receiver of the per-block producer credit.
    pub beneficiary: String,
}

impl AppState {
    pub fn new(node_id: String, beneficiary: String) -> Self {
        Self {
            ledger: Mutex::new(Blockchain::new()),
            peers: Mutex::new(PeerRegistry::new()),
            peer_client: HttpPeerClient::new(),
            node_id,
            beneficiary,
        }
    }
}

/* ---------- Chain API models ---------- */

/// Also the payload peers read from each other; field names are part
/// of the wire contract.
#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub index: u64,
    pub timestamp: i64,
    pub proof: u64,
    pub previous_hash: String,
    pub transactions: Vec<Transaction>,
}

/* ---------- TX API models ---------- */

/// Fields are optional so a missing one maps to a clean 400 instead
/// of a deserialization error.
#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub amount: Option<i64>,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    /// Index of the block that will carry the transaction.
    pub index: u64,
}

/* ---------- Nodes API models ---------- */

#[derive(Deserialize)]
pub struct ConnectNodesRequest {
    pub nodes: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct NodesResponse {
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct ReconcileResponse {
    pub replaced: bool,
    pub length: usize,
    pub chain: Vec<Block>,
}
