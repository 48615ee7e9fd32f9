//! Domain invariants for the Distribution Engine
//!
//! Checked by the service in debug builds and asserted directly by the
//! test suite.

use shared_types::{Level, RewardTotals};

/// Conservation: for every network in `totals` with a positive total and at
/// least one matching fingerprint node, the distributed amounts sum to the
/// total within `tolerance` relative error.
pub fn invariant_conservation(level: &Level, totals: &RewardTotals, tolerance: f64) -> bool {
    for (network, &total) in totals {
        if total <= 0.0 {
            continue;
        }
        let amounts = level.amounts_for(network);
        if amounts.is_empty() {
            continue;
        }
        let sum: f64 = amounts.iter().sum();
        if (sum - total).abs() > total * tolerance {
            return false;
        }
    }
    true
}

/// Shape: distribution never adds or removes nodes or edges, and node ids
/// are unchanged and in the same order.
pub fn invariant_shape_preserved(before: &Level, after: &Level) -> bool {
    before.node_count() == after.node_count()
        && before.edge_count() == after.edge_count()
        && before
            .nodes
            .iter()
            .zip(&after.nodes)
            .all(|(a, b)| a.id == b.id && a.kind == b.kind)
}

/// Non-negativity: every transaction amount in the level is ≥ 0.
pub fn invariant_non_negative(level: &Level) -> bool {
    level
        .nodes
        .iter()
        .filter_map(|n| n.data.transaction.as_ref())
        .all(|tx| tx.amount >= 0.0)
}
