//! Reward value types
//!
//! `RewardTotals` is the ephemeral per-request mapping handed to the
//! distribution engine. `ResolvedTotals` is the resolver's output: the same
//! amounts plus a provenance tag per network, so admin-facing callers can
//! render "Custom" badges for per-user overrides.

use crate::network::NetworkCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-network totals to distribute for one (user, level) pair.
/// Ephemeral; computed per request, never persisted.
pub type RewardTotals = BTreeMap<NetworkCode, f64>;

/// Where a resolved reward amount came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Explicit per-user override
    User,
    /// Level-wide default
    Global,
    /// No reward configured for this slot
    None,
}

/// One network's resolved reward for a (user, level) pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedReward {
    pub amount: f64,
    pub provenance: Provenance,
}

impl ResolvedReward {
    pub fn none() -> Self {
        Self {
            amount: 0.0,
            provenance: Provenance::None,
        }
    }
}

/// Resolved per-network rewards for one (user, level) pair.
///
/// Zero/`none` entries are retained so callers can show every configured
/// network, not just the funded ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTotals {
    pub level: u32,
    pub rewards: BTreeMap<NetworkCode, ResolvedReward>,
}

impl ResolvedTotals {
    pub fn get(&self, network: &NetworkCode) -> Option<&ResolvedReward> {
        self.rewards.get(network)
    }

    /// Strip provenance down to the plain totals map fed to the
    /// distribution engine.
    pub fn to_totals(&self) -> RewardTotals {
        self.rewards
            .iter()
            .map(|(network, reward)| (network.clone(), reward.amount))
            .collect()
    }
}

/// Per-user reward overrides, keyed by level number then network.
///
/// Mirrors the account store's `lvlN NetworkRewards` fields; absent keys
/// mean "no override, fall through to the global default".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRewardProfile {
    pub user_id: String,
    #[serde(default)]
    pub overrides: BTreeMap<u32, BTreeMap<NetworkCode, f64>>,
}

impl UserRewardProfile {
    pub fn override_for(&self, level: u32, network: &NetworkCode) -> Option<f64> {
        self.overrides.get(&level)?.get(network).copied()
    }
}

/// Admin-managed level-wide default rewards, keyed like
/// [`UserRewardProfile::overrides`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalRewardDefaults {
    #[serde(default)]
    pub defaults: BTreeMap<u32, BTreeMap<NetworkCode, f64>>,
}

impl GlobalRewardDefaults {
    pub fn default_for(&self, level: u32, network: &NetworkCode) -> Option<f64> {
        self.defaults.get(&level)?.get(network).copied()
    }
}
