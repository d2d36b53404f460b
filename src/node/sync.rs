use std::sync::Mutex;
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::{PeerError, peers::PeerRegistry};
use crate::blockchain::{Block, Blockchain, validate};

/// Budget for a single peer round-trip; an unresponsive peer must not
/// stall reconciliation past this.
pub const PEER_TIMEOUT: Duration = Duration::from_secs(5);

/// Payload a peer serves for its chain (shared with the local
/// `GET /chain/` endpoint, so nodes can read each other).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteChain {
    pub length: usize,
    pub chain: Vec<Block>,
}

/// Transport seam for reading a peer's chain. The synchronizer only
/// depends on this trait, so tests run it against fakes without any
/// network I/O.
#[allow(async_fn_in_trait)]
pub trait PeerClient {
    async fn fetch_chain(&self, authority: &str) -> Result<RemoteChain, PeerError>;
}

/// reqwest-backed peer client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpPeerClient {
    http: reqwest::Client,
}

impl HttpPeerClient {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(PEER_TIMEOUT)
            .build()
            .expect("build http client");
        Self { http }
    }
}

impl Default for HttpPeerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PeerClient for HttpPeerClient {
    async fn fetch_chain(&self, authority: &str) -> Result<RemoteChain, PeerError> {
        let url = format!("http://{authority}/api/v1/chain/");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|err| PeerError::Unreachable(err.to_string()))?;
        response
            .json::<RemoteChain>()
            .await
            .map_err(|err| PeerError::Unreachable(err.to_string()))
    }
}

/// Longest-chain reconciliation against the registered peers.
pub struct Synchronizer<C> {
    client: C,
}

impl<C: PeerClient> Synchronizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Scan every registered peer for a strictly longer valid chain
    /// and adopt the best one found.
    ///
    /// One unreachable peer never aborts the scan; it is logged and
    /// skipped. Equal-length chains never replace the local one, even
    /// when they differ. Returns whether a replacement happened.
    pub async fn reconcile(&self, ledger: &Mutex<Blockchain>, registry: &PeerRegistry) -> bool {
        if registry.is_empty() {
            return false;
        }

        let mut best_length = ledger.lock().expect("mutex poisoned").len();
        let mut best_chain: Option<Vec<Block>> = None;

        for authority in registry.iter() {
            match self.client.fetch_chain(authority).await {
                Ok(remote) => {
                    if remote.length > best_length && validate::is_chain_valid(&remote.chain) {
                        best_length = remote.length;
                        best_chain = Some(remote.chain);
                    }
                }
                Err(err) => {
                    warn!("skipping peer {authority} during reconcile: {err}");
                }
            }
        }

        match best_chain {
            Some(chain) => {
                let mut ledger = ledger.lock().expect("mutex poisoned");
                // The chain may have grown while peers were being
                // fetched; the candidate must still be strictly longer
                // at the moment of replacement.
                if best_length <= ledger.len() {
                    return false;
                }
                info!("adopting chain of length {best_length} from peers");
                ledger.replace_chain(chain);
                true
            }
            None => false,
        }
    }
}
