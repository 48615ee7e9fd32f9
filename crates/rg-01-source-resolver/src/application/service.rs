//! Reward Source Service
//!
//! Main service implementing RewardSourceApi.

use crate::config::ResolverConfig;
use crate::ports::inbound::RewardSourceApi;
use shared_types::{
    GlobalRewardDefaults, Provenance, ResolvedReward, ResolvedTotals, UserRewardProfile,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Reward Source Service
///
/// Pure lookup over its inputs, re-evaluated on every call. Resolution
/// order per network: user override, global default, zero.
pub struct RewardSourceService {
    config: ResolverConfig,
}

impl RewardSourceService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    fn level_in_range(&self, level: u32) -> bool {
        level >= 1 && level <= self.config.max_level
    }

    fn resolve_one(
        &self,
        user: &UserRewardProfile,
        globals: &GlobalRewardDefaults,
        level: u32,
        network: &shared_types::NetworkCode,
    ) -> ResolvedReward {
        if let Some(amount) = user.override_for(level, network) {
            return ResolvedReward {
                amount,
                provenance: Provenance::User,
            };
        }
        if let Some(amount) = globals.default_for(level, network) {
            return ResolvedReward {
                amount,
                provenance: Provenance::Global,
            };
        }
        ResolvedReward::none()
    }
}

impl Default for RewardSourceService {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardSourceApi for RewardSourceService {
    fn resolve_totals(
        &self,
        user: &UserRewardProfile,
        globals: &GlobalRewardDefaults,
        level: u32,
    ) -> ResolvedTotals {
        let mut rewards = BTreeMap::new();

        if !self.level_in_range(level) {
            debug!(level, max_level = self.config.max_level, "Level out of range, resolving to zero totals");
            for network in &self.config.networks {
                rewards.insert(network.clone(), ResolvedReward::none());
            }
            return ResolvedTotals { level, rewards };
        }

        for network in &self.config.networks {
            let resolved = self.resolve_one(user, globals, level, network);
            rewards.insert(network.clone(), resolved);
        }

        debug!(
            user_id = %user.user_id,
            level,
            funded = rewards.values().filter(|r| r.amount > 0.0).count(),
            "Resolved reward totals"
        );

        ResolvedTotals { level, rewards }
    }
}
