//! Inbound Ports (Driving Ports / API)

use crate::domain::errors::DistributionError;
use shared_types::{Level, RewardTotals};

/// Primary Distribution API
pub trait DistributionApi: Send + Sync {
    /// Distribute per-network totals across a level's fingerprint nodes.
    ///
    /// Returns a transformed clone of `level` in which every fingerprint
    /// node whose currency appears in `totals` carries a freshly computed
    /// amount. All other nodes, all edges, and the input level itself are
    /// left untouched. Networks with no matching nodes, and zero or absent
    /// totals, are silent no-ops.
    fn distribute(&self, level: &Level, totals: &RewardTotals)
        -> Result<Level, DistributionError>;
}
