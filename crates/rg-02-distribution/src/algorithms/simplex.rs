//! Random simplex partitioning
//!
//! A total is split across N recipients by sampling a point uniformly on
//! the (N-1)-simplex: draw N unit-exponential values and normalize by
//! their sum (a Dirichlet(1,...,1) sample). Every share is strictly
//! positive, and shares differ between recipients with overwhelming
//! probability.

use super::rounding::round_to_decimals;
use rand::Rng;

/// Draw `n` strictly positive weights summing to 1.
pub fn random_weights<R: Rng>(rng: &mut R, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }

    let mut draws = Vec::with_capacity(n);
    for _ in 0..n {
        // gen() is [0, 1); reject 0 so -ln(u) stays finite and positive
        let u = loop {
            let u: f64 = rng.gen();
            if u > 0.0 {
                break u;
            }
        };
        draws.push(-u.ln());
    }

    let sum: f64 = draws.iter().sum();
    draws.into_iter().map(|d| d / sum).collect()
}

/// Split `total` across `n` recipients.
///
/// Shares are random and strictly positive, rounded to `decimals` places;
/// the last recipient absorbs the rounding drift so the shares sum to
/// `total` exactly. A single recipient gets the whole total untouched.
pub fn split_amount<R: Rng>(
    rng: &mut R,
    total: f64,
    n: usize,
    decimals: u32,
) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![total],
        _ => {
            let weights = random_weights(rng, n);
            let mut amounts: Vec<f64> = weights
                .iter()
                .map(|w| round_to_decimals(w * total, decimals))
                .collect();

            // Largest-remainder correction: the last share is recomputed
            // from the others so the sum is exact. Clamped at zero for
            // sub-unit totals where rounding alone overshoots.
            let partial: f64 = amounts[..n - 1].iter().sum();
            amounts[n - 1] = (total - partial).max(0.0);
            amounts
        }
    }
}
