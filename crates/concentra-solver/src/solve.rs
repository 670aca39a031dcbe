//! The convergence driver: multi-dimension sweep loop.

use crate::aggregate;
use crate::rebalance::rebalance;
use crate::redistribute::redistribute;
use concentra_core::{LimitTable, Property, SolveConfig, SolveError, SolveResult};
use rust_decimal::Decimal;

/// Solves the portfolio's contributions against the limit table.
///
/// Initializes `contribution = value` for every property, then sweeps every
/// attribute dimension: each dimension's group sums are rebalanced against
/// its limit and the targets redistributed pro-rata onto the shared
/// contribution field. Because contributions are shared across dimensions,
/// one dimension's pass perturbs the shares of every other, so global
/// convergence is checked only after a full sweep and the sweep repeats
/// until every dimension's every attribute value holds at most its limit's
/// share (at `share_precision` digits).
///
/// A pure function of its inputs: the property vector is owned for the
/// duration of the call and returned with final contributions on success.
///
/// # Errors
///
/// - [`SolveError::InvalidLimit`] for a limit outside (0, 1).
/// - [`SolveError::MissingLimit`] if a dimension on the properties has no
///   limit entry.
/// - [`SolveError::NonConvergence`] if `max_sweeps` is reached with a limit
///   still violated, or if the contribution mass collapses to zero under an
///   infeasible limit table. No partial result is returned.
///
/// An empty collection is returned unchanged. A contribution already
/// present on the input is overwritten with a warning.
pub fn solve(
    mut properties: Vec<Property>,
    limits: &LimitTable,
    config: &SolveConfig,
) -> SolveResult<Vec<Property>> {
    let dimensions: Vec<String> = match properties.first() {
        Some(first) => first.dimensions().map(str::to_string).collect(),
        None => return Ok(properties),
    };

    limits.validate()?;
    for dimension in &dimensions {
        limits.require(dimension)?;
    }

    if properties
        .first()
        .is_some_and(|p| p.contribution.is_some())
    {
        tracing::warn!("contribution already present on input; overwriting");
    }
    for property in properties.iter_mut() {
        property.contribution = Some(property.value);
    }

    let mut worst_excess = Decimal::ZERO;
    for sweep in 1..=config.max_sweeps {
        for dimension in &dimensions {
            let limit = limits.require(dimension)?;
            let sums = aggregate::dimension_sums(&properties, dimension);
            let targets = rebalance(&sums, limit, config)?;
            redistribute(&mut properties, dimension, &sums, &targets);
        }

        let totals = aggregate::totals(&properties)?;
        if totals.contribution_total.is_zero() {
            // Zero mass: shares are undefined and no further sweep can
            // restore them.
            return Err(SolveError::non_convergence(sweep, Decimal::ONE));
        }

        let shares = aggregate::group_shares(&properties, config.share_precision)?;
        worst_excess = Decimal::ZERO;
        for (dimension, bucket) in &shares {
            let limit = limits.require(dimension)?;
            for &share in bucket.values() {
                if share - limit > worst_excess {
                    worst_excess = share - limit;
                }
            }
        }

        tracing::debug!(sweep, %worst_excess, "sweep complete");

        if worst_excess <= Decimal::ZERO {
            return Ok(properties);
        }
    }

    Err(SolveError::non_convergence(config.max_sweeps, worst_excess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use concentra_core::PropertyBuilder;
    use rust_decimal_macros::dec;

    fn property(tenant: &str, value: Decimal) -> Property {
        PropertyBuilder::new()
            .attribute("tenant", tenant)
            .value(value)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_portfolio_is_noop() {
        let limits = LimitTable::new();
        let solved = solve(Vec::new(), &limits, &SolveConfig::default()).unwrap();
        assert!(solved.is_empty());
    }

    #[test]
    fn test_contribution_initialized_from_value() {
        let properties = vec![property("A", dec!(400)), property("B", dec!(600))];
        let limits = LimitTable::new().with_limit("tenant", dec!(0.7));

        let solved = solve(properties, &limits, &SolveConfig::default()).unwrap();

        // B holds 60% < 70%; nothing to redistribute
        assert_eq!(solved[0].contribution, Some(dec!(400)));
        assert_eq!(solved[1].contribution, Some(dec!(600)));
    }

    #[test]
    fn test_missing_limit_rejected() {
        let properties = vec![property("A", dec!(400))];
        let limits = LimitTable::new().with_limit("geo", dec!(0.3));

        match solve(properties, &limits, &SolveConfig::default()) {
            Err(SolveError::MissingLimit { dimension }) => assert_eq!(dimension, "tenant"),
            other => panic!("expected MissingLimit, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_limit_rejected() {
        let properties = vec![property("A", dec!(400))];
        let limits = LimitTable::new().with_limit("tenant", dec!(1.3));

        assert!(matches!(
            solve(properties, &limits, &SolveConfig::default()),
            Err(SolveError::InvalidLimit { .. })
        ));
    }

    #[test]
    fn test_preexisting_contribution_overwritten() {
        let mut p = property("A", dec!(400));
        p.contribution = Some(dec!(123));
        let limits = LimitTable::new().with_limit("tenant", dec!(0.9));

        let solved = solve(
            vec![p, property("B", dec!(600))],
            &limits,
            &SolveConfig::default(),
        )
        .unwrap();

        assert_eq!(solved[0].contribution, Some(dec!(400)));
    }
}
