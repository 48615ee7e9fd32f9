//! # RG-01: Reward Source Resolver Subsystem
//!
//! Resolves the per-network reward totals that apply to one user at one
//! level: explicit per-user override, else the level-wide global default,
//! else zero. Every resolved amount carries a provenance tag so callers
//! can tell a custom reward from a default one.
//!
//! ## Architecture
//!
//! - **Config**: the configured network set and level range
//! - **Ports**: Inbound (RewardSourceApi)
//! - **Application**: Service orchestration
//!
//! Both the resolver and its output are pure values; there is no caching
//! and no internal state.

pub mod application;
pub mod config;
pub mod ports;

pub use application::service::RewardSourceService;
pub use config::ResolverConfig;
pub use ports::inbound::RewardSourceApi;
