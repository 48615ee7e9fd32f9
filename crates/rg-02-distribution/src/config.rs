//! Configuration for the Distribution Engine Subsystem

use serde::{Deserialize, Serialize};
use shared_types::NetworkCode;
use std::collections::BTreeMap;

/// Distribution configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Decimal places for rounded amounts when a network has no override
    pub default_decimals: u32,
    /// Per-network decimal precision (e.g. 2 for fiat-pegged stablecoins)
    pub network_decimals: BTreeMap<NetworkCode, u32>,
    /// Relative tolerance used by the conservation invariant check
    pub conservation_tolerance: f64,
}

impl DistributionConfig {
    pub fn decimals_for(&self, network: &NetworkCode) -> u32 {
        self.network_decimals
            .get(network)
            .copied()
            .unwrap_or(self.default_decimals)
    }
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            default_decimals: 8,
            network_decimals: BTreeMap::new(),
            conservation_tolerance: 0.01,
        }
    }
}
