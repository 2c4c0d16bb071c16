//! Peer networking configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::bounds::{duration_range, int_range};

/// Upper bound on `max_peers`.
pub const MAX_PEERS_LIMIT: u32 = 1000;

/// Upper bound on `peer_timeout`.
pub const PEER_TIMEOUT_LIMIT: Duration = Duration::from_secs(5 * 60);

/// Network configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Multiaddr the node listens on
    pub listen_addr: String,

    /// Bootstrap peer multiaddrs dialed at startup
    pub bootstrap_peers: Vec<String>,

    /// Maximum concurrent peer connections
    pub max_peers: u32,

    /// Per-peer request timeout
    #[serde(with = "humantime_serde")]
    pub peer_timeout: Duration,

    /// Enable mDNS discovery on the local network
    pub enable_mdns: bool,

    /// Enable NAT traversal (hole punching)
    pub enable_nat_traversal: bool,

    /// Enable relayed connections for otherwise unreachable peers
    pub enable_relay: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            listen_addr: "/ip4/0.0.0.0/tcp/4001".to_string(),
            bootstrap_peers: Vec::new(),
            max_peers: 100,
            peer_timeout: Duration::from_secs(30),
            enable_mdns: true,
            enable_nat_traversal: true,
            enable_relay: false,
        }
    }
}

impl NetworkConfig {
    /// Returns the first violated rule, if any.
    pub fn validate(&self) -> Result<(), String> {
        int_range("max_peers", self.max_peers, MAX_PEERS_LIMIT, "1000")?;
        duration_range("peer_timeout", self.peer_timeout, PEER_TIMEOUT_LIMIT, "5m")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_peers_boundaries() {
        let mut network = NetworkConfig::default();

        network.max_peers = 1;
        assert!(network.validate().is_ok());

        network.max_peers = MAX_PEERS_LIMIT;
        assert!(network.validate().is_ok());

        network.max_peers = MAX_PEERS_LIMIT + 1;
        assert!(network.validate().is_err());

        network.max_peers = 0;
        assert!(network.validate().is_err());
    }

    #[test]
    fn test_peer_timeout_boundaries() {
        let mut network = NetworkConfig::default();

        network.peer_timeout = PEER_TIMEOUT_LIMIT;
        assert!(network.validate().is_ok());

        network.peer_timeout = PEER_TIMEOUT_LIMIT + Duration::from_secs(1);
        assert!(network.validate().is_err());

        network.peer_timeout = Duration::ZERO;
        assert!(network.validate().is_err());
    }
}
