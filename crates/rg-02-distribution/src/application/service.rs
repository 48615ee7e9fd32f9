//! Distribution Service
//!
//! Main service implementing DistributionApi.

use crate::algorithms::split_amount;
use crate::config::DistributionConfig;
use crate::domain::errors::DistributionError;
use crate::domain::invariants::{
    invariant_conservation, invariant_non_negative, invariant_shape_preserved,
};
use crate::ports::inbound::DistributionApi;
use rand::Rng;
use shared_types::{Level, RewardTotals};
use tracing::{debug, info, warn};

/// Distribution Service
///
/// Orchestrates one distribution pass:
/// 1. Validate totals and level structure
/// 2. Clone the level (the input template is never mutated)
/// 3. Per network: select matching fingerprint nodes, split the total,
///    write the new amounts
/// 4. Return the transformed clone
pub struct DistributionService {
    config: DistributionConfig,
}

impl DistributionService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: DistributionConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: DistributionConfig) -> Self {
        Self { config }
    }

    fn validate_totals(&self, totals: &RewardTotals) -> Result<(), DistributionError> {
        for (network, &amount) in totals {
            if !amount.is_finite() {
                return Err(DistributionError::NonFiniteTotal {
                    network: network.clone(),
                });
            }
            if amount < 0.0 {
                return Err(DistributionError::NegativeTotal {
                    network: network.clone(),
                    amount,
                });
            }
        }
        Ok(())
    }

    fn validate_level(&self, level: &Level) -> Result<(), DistributionError> {
        for node in level.fingerprint_nodes() {
            if node.data.transaction.is_none() {
                return Err(DistributionError::MissingTransaction {
                    node_id: node.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Distribute with a caller-supplied generator.
    ///
    /// The trait entry point uses `thread_rng`; tests pass a seeded
    /// generator for reproducible runs.
    pub fn distribute_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        level: &Level,
        totals: &RewardTotals,
    ) -> Result<Level, DistributionError> {
        self.validate_totals(totals)?;
        self.validate_level(level)?;

        let mut out = level.clone();
        let mut funded_networks = 0usize;

        for (network, &total) in totals {
            if total == 0.0 {
                continue;
            }

            let indices: Vec<usize> = out
                .nodes
                .iter()
                .enumerate()
                .filter(|(_, node)| node.is_fingerprint())
                .filter(|(_, node)| {
                    node.data
                        .transaction
                        .as_ref()
                        .is_some_and(|tx| &tx.currency == network)
                })
                .map(|(i, _)| i)
                .collect();

            if indices.is_empty() {
                debug!(%network, total, "No matching fingerprint nodes, dropping total");
                continue;
            }

            let decimals = self.config.decimals_for(network);
            let amounts = split_amount(rng, total, indices.len(), decimals);

            for (i, amount) in indices.into_iter().zip(amounts) {
                if let Some(tx) = out.nodes[i].data.transaction.as_mut() {
                    tx.amount = amount;
                }
            }
            funded_networks += 1;
        }

        debug_assert!(invariant_shape_preserved(level, &out));
        debug_assert!(invariant_non_negative(&out));
        if !invariant_conservation(&out, totals, self.config.conservation_tolerance) {
            // Only reachable for totals below the rounding grid
            warn!(level = out.number, "Distributed amounts drifted past tolerance");
        }

        info!(
            level = out.number,
            funded_networks,
            node_count = out.node_count(),
            "Distribution pass complete"
        );

        Ok(out)
    }
}

impl Default for DistributionService {
    fn default() -> Self {
        Self::new()
    }
}

impl DistributionApi for DistributionService {
    fn distribute(
        &self,
        level: &Level,
        totals: &RewardTotals,
    ) -> Result<Level, DistributionError> {
        self.distribute_with_rng(&mut rand::thread_rng(), level, totals)
    }
}
