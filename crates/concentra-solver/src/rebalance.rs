//! Single-dimension water-filling of group sums against a concentration
//! limit.
//!
//! Uses the iteration: any group whose sum exceeds `limit * total` is
//! recomputed as
//!
//! `target = limit / (1 - limit) * (total - sum)`
//!
//! the unique value making `target / (target + other) == limit` with the
//! other groups held fixed. Reducing one group shrinks the total, which can
//! expose violations in other groups of the same dimension, so the pass
//! repeats until a full pass changes nothing. This is a fixed-point
//! iteration, not a closed-form solve.

use crate::AMOUNT_PRECISION;
use concentra_core::{SolveConfig, SolveError, SolveResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Computes per-group target sums satisfying the limit, preserving the
/// relative proportions of groups that stay under it.
///
/// Targets never exceed their input sums: the iteration only ever reduces
/// over-limit groups. Targets are quantized to [`AMOUNT_PRECISION`] digits
/// truncating toward zero.
///
/// Infeasible limits (limit below `1 / domain size`) contract every group
/// toward zero; the all-zero map is a fixed point here, and the driver's
/// collapse check reports it.
///
/// # Errors
///
/// Returns [`SolveError::NonConvergence`] if `max_rebalance_iterations`
/// passes still leave the map changing.
pub fn rebalance(
    sums: &BTreeMap<String, Decimal>,
    limit: Decimal,
    config: &SolveConfig,
) -> SolveResult<BTreeMap<String, Decimal>> {
    let mut adjusted = sums.clone();
    let keys: Vec<String> = adjusted.keys().cloned().collect();

    for _ in 0..config.max_rebalance_iterations {
        let mut changed = false;

        for key in &keys {
            let total: Decimal = adjusted.values().copied().sum();
            let current = adjusted.get(key).copied().unwrap_or(Decimal::ZERO);

            if current > limit * total {
                let other = total - current;
                let target = (limit / (Decimal::ONE - limit) * other)
                    .round_dp_with_strategy(AMOUNT_PRECISION, RoundingStrategy::ToZero);
                adjusted.insert(key.clone(), target);
                changed = true;
            }
        }

        if !changed {
            return Ok(adjusted);
        }
    }

    Err(SolveError::non_convergence(
        config.max_rebalance_iterations,
        worst_excess(&adjusted, limit),
    ))
}

/// Largest share-over-limit excess across the groups, zero when the map
/// has no mass.
fn worst_excess(sums: &BTreeMap<String, Decimal>, limit: Decimal) -> Decimal {
    let total: Decimal = sums.values().copied().sum();
    if total.is_zero() {
        return Decimal::ZERO;
    }

    sums.values()
        .map(|sum| sum / total - limit)
        .filter(|excess| *excess > Decimal::ZERO)
        .max()
        .unwrap_or(Decimal::ZERO)
}
