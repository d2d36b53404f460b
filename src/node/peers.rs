use std::collections::HashSet;

use url::Url;

use super::PeerError;

/// The set of known peer authorities (host plus optional port).
///
/// Membership is unique and unordered; re-adding an authority is a
/// no-op.
#[derive(Debug, Clone, Default)]
pub struct PeerRegistry {
    peers: HashSet<String>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self {
            peers: HashSet::new(),
        }
    }

    /// Register a peer given any address or URL. Scheme and path are
    /// discarded; only the network authority is retained. Returns the
    /// normalized authority that was stored.
    pub fn add(&mut self, address: &str) -> Result<String, PeerError> {
        let authority = authority_of(address)
            .ok_or_else(|| PeerError::InvalidAddress(address.to_string()))?;
        self.peers.insert(authority.clone());
        Ok(authority)
    }

    /// Unordered view of the registered authorities.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.peers.iter()
    }

    pub fn authorities(&self) -> Vec<String> {
        self.peers.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

/// Extract `host[:port]` from an address. Bare authorities like
/// `127.0.0.1:5000` are not valid absolute URLs, so parsing retries
/// with an `http://` prefix before giving up.
fn authority_of(address: &str) -> Option<String> {
    let url = Url::parse(address)
        .ok()
        .filter(Url::has_host)
        .or_else(|| {
            Url::parse(&format!("http://{address}"))
                .ok()
                .filter(Url::has_host)
        })?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::PeerRegistry;

    #[test]
    fn strips_scheme_and_path() {
        let mut registry = PeerRegistry::new();
        let authority = registry
            .add("http://127.0.0.1:5000/api/v1/chain/")
            .expect("valid address");
        assert_eq!(authority, "127.0.0.1:5000");
    }

    #[test]
    fn accepts_bare_authority() {
        let mut registry = PeerRegistry::new();
        assert_eq!(
            registry.add("127.0.0.1:5000").expect("valid address"),
            "127.0.0.1:5000"
        );
        assert_eq!(
            registry.add("localhost:5000").expect("valid address"),
            "localhost:5000"
        );
    }

    #[test]
    fn keeps_host_without_port() {
        let mut registry = PeerRegistry::new();
        assert_eq!(
            registry.add("http://node.example.org").expect("valid address"),
            "node.example.org"
        );
    }

    #[test]
    fn readding_same_authority_is_a_noop() {
        let mut registry = PeerRegistry::new();
        registry.add("http://127.0.0.1:5000").expect("valid address");
        registry.add("127.0.0.1:5000/somewhere").expect("valid address");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rejects_unparseable_address() {
        let mut registry = PeerRegistry::new();
        assert!(registry.add("").is_err());
        assert!(registry.len() == 0);
    }
}
