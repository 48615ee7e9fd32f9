//! Property suites for the distribution contract.
//!
//! Random levels and totals, checked against the engine's guarantees:
//! conservation, no-ops for absent currencies, non-negativity, and shape
//! preservation.

#[cfg(test)]
mod tests {
    use crate::fixtures::{fingerprint_node, level, network};
    use proptest::prelude::*;
    use rg_02_distribution::{DistributionApi, DistributionService};
    use shared_types::{Level, NetworkCode, RewardTotals};
    use std::collections::BTreeMap;

    const NETWORKS: [&str; 3] = ["BTC", "ETH", "SOL"];

    fn build_level(node_defs: &[(usize, f64)]) -> Level {
        let nodes = node_defs
            .iter()
            .enumerate()
            .map(|(i, &(net_idx, amount))| {
                fingerprint_node(&format!("n{i}"), NETWORKS[net_idx % NETWORKS.len()], amount)
            })
            .collect();
        level(1, nodes)
    }

    fn build_totals(slots: &[Option<f64>]) -> RewardTotals {
        let mut totals = BTreeMap::new();
        for (i, slot) in slots.iter().enumerate() {
            if let Some(amount) = slot {
                totals.insert(network(NETWORKS[i]), *amount);
            }
        }
        totals
    }

    proptest! {
        /// Every funded network with matching nodes conserves its total
        /// within 1% relative tolerance.
        #[test]
        fn prop_conservation(
            node_defs in prop::collection::vec((0usize..3, 0.0f64..100.0), 0..8),
            slots in prop::collection::vec(prop::option::of(0.001f64..1000.0), 3),
        ) {
            let lvl = build_level(&node_defs);
            let totals = build_totals(&slots);

            let out = DistributionService::new().distribute(&lvl, &totals).unwrap();

            for (net, &total) in &totals {
                let amounts = out.amounts_for(net);
                if total > 0.0 && !amounts.is_empty() {
                    let sum: f64 = amounts.iter().sum();
                    prop_assert!(
                        (sum - total).abs() <= total * 0.01,
                        "network {net}: sum {sum} vs total {total}"
                    );
                }
            }
        }

        /// Networks absent from the totals keep their original amounts.
        #[test]
        fn prop_absent_currency_untouched(
            node_defs in prop::collection::vec((0usize..3, 0.0f64..100.0), 1..8),
            total in 0.001f64..1000.0,
        ) {
            let lvl = build_level(&node_defs);
            // Fund only BTC; ETH and SOL must come back unchanged
            let totals = BTreeMap::from([(network("BTC"), total)]);

            let out = DistributionService::new().distribute(&lvl, &totals).unwrap();

            for code in ["ETH", "SOL"] {
                let net = NetworkCode::from(code);
                prop_assert_eq!(out.amounts_for(&net), lvl.amounts_for(&net));
            }
        }

        /// Funding a network with zero matching nodes is a full no-op.
        #[test]
        fn prop_zero_eligible_nodes_is_identity(
            node_defs in prop::collection::vec((0usize..2, 0.0f64..100.0), 0..8),
            total in 0.001f64..1000.0,
        ) {
            // Nodes only ever carry BTC or ETH; fund SOL
            let lvl = build_level(&node_defs);
            let totals = BTreeMap::from([(network("SOL"), total)]);

            let out = DistributionService::new().distribute(&lvl, &totals).unwrap();

            prop_assert_eq!(out, lvl);
        }

        /// All produced amounts are non-negative and the graph shape is
        /// byte-identical: same node count, ids, kinds, and edges.
        #[test]
        fn prop_non_negative_and_shape_preserved(
            node_defs in prop::collection::vec((0usize..3, 0.0f64..100.0), 0..8),
            slots in prop::collection::vec(prop::option::of(0.001f64..1000.0), 3),
        ) {
            let lvl = build_level(&node_defs);
            let totals = build_totals(&slots);

            let out = DistributionService::new().distribute(&lvl, &totals).unwrap();

            prop_assert!(out
                .nodes
                .iter()
                .filter_map(|n| n.data.transaction.as_ref())
                .all(|tx| tx.amount >= 0.0));
            prop_assert_eq!(out.node_count(), lvl.node_count());
            prop_assert_eq!(out.edge_count(), lvl.edge_count());
            for (before, after) in lvl.nodes.iter().zip(&out.nodes) {
                prop_assert_eq!(&before.id, &after.id);
                prop_assert_eq!(&before.kind, &after.kind);
            }
        }
    }
}
