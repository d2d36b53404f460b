pub mod peers;
pub mod sync;

pub use peers::PeerRegistry;
pub use sync::{HttpPeerClient, PeerClient, RemoteChain, Synchronizer};

use thiserror::Error;

/// Failures on the peer-facing side of the engine. None are fatal: a
/// bad address is a request error, an unreachable peer is skipped
/// during reconciliation.
#[derive(Debug, Error)]
pub enum PeerError {
    #[error("invalid peer address: {0}")]
    InvalidAddress(String),
    #[error("peer unreachable: {0}")]
    Unreachable(String),
}
