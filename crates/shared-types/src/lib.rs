//! # Shared Types Crate
//!
//! This crate contains the level-graph read model and the reward value
//! types shared across the Reward-Grid subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Read-Only Graph**: `Level` values are admin-managed templates; no
//!   subsystem mutates one in place, transforms always return a new value.
//! - **Open Network Set**: network codes are string keys, never a closed
//!   enum, so new networks require no type changes.

pub mod level;
pub mod network;
pub mod rewards;

pub use level::{Level, LevelEdge, LevelNode, NodeData, RewardTransaction, TxStatus, FINGERPRINT_KIND};
pub use network::NetworkCode;
pub use rewards::{
    GlobalRewardDefaults, Provenance, ResolvedReward, ResolvedTotals, RewardTotals,
    UserRewardProfile,
};
