//! # RG-02: Distribution Engine Subsystem
//!
//! Splits a per-network reward total across a level's fingerprint nodes.
//! Each matching node receives a strictly positive pseudo-random share;
//! after rounding, the shares sum to the original total exactly (the last
//! node absorbs rounding drift).
//!
//! ## Architecture
//!
//! - **Domain**: Errors and conservation/shape invariants
//! - **Algorithms**: Random simplex weights, rounding, amount splitting
//! - **Ports**: Inbound (DistributionApi)
//! - **Application**: Service orchestration
//!
//! The engine never mutates its input level: it returns a transformed
//! clone, so the shared admin-edited template is never corrupted by a
//! per-user distribution pass.

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::service::DistributionService;
pub use config::DistributionConfig;
pub use domain::errors::DistributionError;
pub use ports::inbound::DistributionApi;
