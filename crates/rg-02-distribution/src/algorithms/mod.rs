//! Pure numeric routines used by the distribution service.

pub mod rounding;
pub mod simplex;

pub use rounding::round_to_decimals;
pub use simplex::{random_weights, split_amount};
