//! Error types for the Distribution Engine

use shared_types::NetworkCode;
use thiserror::Error;

/// All errors that can occur during distribution.
///
/// Missing currencies, empty node sets, and zero totals are valid no-ops,
/// not errors. Everything here is a caller precondition violation and is
/// surfaced immediately, never coerced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// A total must be ≥ 0
    #[error("Negative total for network {network}: {amount}")]
    NegativeTotal { network: NetworkCode, amount: f64 },

    /// A total must be a finite number
    #[error("Non-finite total for network {network}")]
    NonFiniteTotal { network: NetworkCode },

    /// Fingerprint nodes must carry a transaction record
    #[error("Fingerprint node {node_id} has no transaction")]
    MissingTransaction { node_id: String },
}
