//! Inbound Ports (Driving Ports / API)

use shared_types::{GlobalRewardDefaults, ResolvedTotals, UserRewardProfile};

/// Primary Reward Source API
pub trait RewardSourceApi: Send + Sync {
    /// Resolve the per-network reward totals for one user at one level.
    ///
    /// For each configured network the amount is: the user's override for
    /// (network, level) if present; else the global default for that slot;
    /// else zero. Provenance tags record which branch applied. A level
    /// outside the configured range yields all-zero totals rather than an
    /// error; that is a lookup miss, not a fault.
    fn resolve_totals(
        &self,
        user: &UserRewardProfile,
        globals: &GlobalRewardDefaults,
        level: u32,
    ) -> ResolvedTotals;
}
