//! Configuration for the Reward Source Resolver Subsystem

use serde::{Deserialize, Serialize};
use shared_types::NetworkCode;

/// Resolver configuration.
///
/// The network list is data, not a closed enum: adding a network is a
/// config change, never a code change.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Networks the platform currently pays rewards on
    pub networks: Vec<NetworkCode>,
    /// Highest configured level; levels outside 1..=max_level resolve
    /// to all-zero totals
    pub max_level: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            networks: ["BTC", "ETH", "TRON", "USDT", "BNB", "SOL"]
                .into_iter()
                .map(NetworkCode::from)
                .collect(),
            max_level: 5,
        }
    }
}
