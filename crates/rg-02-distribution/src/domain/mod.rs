pub mod errors;
pub mod invariants;
