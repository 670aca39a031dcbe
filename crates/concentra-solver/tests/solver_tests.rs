//! End-to-end scenarios for the convergence driver.

use concentra_solver::{group_shares, solve, LimitTable, Property, PropertyBuilder, SolveConfig, SolveError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn property(attrs: &[(&str, &str)], value: Decimal) -> Property {
    let mut builder = PropertyBuilder::new().value(value);
    for (dimension, attr_value) in attrs {
        builder = builder.attribute(*dimension, *attr_value);
    }
    builder.build().unwrap()
}

/// Checks every dimension's every share against its limit.
fn assert_within_limits(properties: &[Property], limits: &LimitTable, precision: u32) {
    let shares = group_shares(properties, precision).unwrap();
    for (dimension, bucket) in &shares {
        let limit = limits.get(dimension).unwrap();
        for (attr_value, share) in bucket {
            assert!(
                *share <= limit,
                "{} = {} holds {} > limit {}",
                dimension,
                attr_value,
                share,
                limit
            );
        }
    }
}

#[test]
fn empty_portfolio_returns_empty() {
    let limits = LimitTable::new().with_limit("tenant", dec!(0.3));
    let solved = solve(Vec::new(), &limits, &SolveConfig::default()).unwrap();
    assert!(solved.is_empty());
}

#[test]
fn single_dimension_equal_split() {
    // The {70, 30} closed form: A is capped at half of the adjusted total,
    // leaving both groups at 30.
    let properties = vec![
        property(&[("tenant", "A")], dec!(70)),
        property(&[("tenant", "B")], dec!(30)),
    ];
    let limits = LimitTable::new().with_limit("tenant", dec!(0.5));

    let solved = solve(properties, &limits, &SolveConfig::default()).unwrap();

    assert_eq!(solved[0].contribution, Some(dec!(30.00)));
    assert_eq!(solved[1].contribution, Some(dec!(30)));
    assert_within_limits(&solved, &limits, 2);
}

#[test]
fn redistribution_is_pro_rata_within_group() {
    let properties = vec![
        property(&[("tenant", "A")], dec!(40)),
        property(&[("tenant", "A")], dec!(30)),
        property(&[("tenant", "B")], dec!(30)),
    ];
    let limits = LimitTable::new().with_limit("tenant", dec!(0.5));

    let solved = solve(properties, &limits, &SolveConfig::default()).unwrap();

    // Group A shrinks from 70 to 30; members scale by 3/7 and truncate
    assert_eq!(solved[0].contribution, Some(dec!(17.14)));
    assert_eq!(solved[1].contribution, Some(dec!(12.85)));
    assert_eq!(solved[2].contribution, Some(dec!(30)));
    assert_within_limits(&solved, &limits, 2);
}

#[test]
fn values_are_never_modified() {
    let properties = vec![
        property(&[("tenant", "A")], dec!(70)),
        property(&[("tenant", "B")], dec!(30)),
    ];
    let limits = LimitTable::new().with_limit("tenant", dec!(0.5));

    let solved = solve(properties, &limits, &SolveConfig::default()).unwrap();

    assert_eq!(solved[0].value, dec!(70));
    assert_eq!(solved[1].value, dec!(30));
}

#[test]
fn satisfied_portfolio_is_a_fixed_point() {
    let properties = vec![
        property(&[("tenant", "A"), ("geo", "E")], dec!(400)),
        property(&[("tenant", "B"), ("geo", "W")], dec!(600)),
    ];
    let limits = LimitTable::new()
        .with_limit("tenant", dec!(0.7))
        .with_limit("geo", dec!(0.7));

    let solved = solve(properties.clone(), &limits, &SolveConfig::default()).unwrap();

    // Nothing was over limit, so contributions equal values untouched
    assert_eq!(solved[0].contribution, Some(dec!(400)));
    assert_eq!(solved[1].contribution, Some(dec!(600)));
}

#[test]
fn resolving_solved_output_is_unchanged() {
    let properties = vec![
        property(&[("tenant", "A")], dec!(70)),
        property(&[("tenant", "B")], dec!(30)),
    ];
    let limits = LimitTable::new().with_limit("tenant", dec!(0.5));
    let config = SolveConfig::default();

    let solved = solve(properties, &limits, &config).unwrap();
    let resolved = solve(solved.clone(), &limits, &config).unwrap();

    assert_eq!(resolved, solved);
}

#[test]
fn two_dimension_sweep_applies_every_dimension() {
    // Only the geo dimension needs rebalancing, and geo is swept before
    // tenant. If a sweep's earlier-dimension adjustments were discarded,
    // geo would still be violated at every check and the solve could
    // never converge.
    let properties = vec![
        property(&[("geo", "E"), ("tenant", "A")], dec!(70)),
        property(&[("geo", "W"), ("tenant", "B")], dec!(30)),
    ];
    let limits = LimitTable::new()
        .with_limit("geo", dec!(0.5))
        .with_limit("tenant", dec!(0.8));

    let solved = solve(properties, &limits, &SolveConfig::default()).unwrap();

    assert_eq!(solved[0].contribution, Some(dec!(30.00)));
    assert_within_limits(&solved, &limits, 2);
}

#[test]
fn cross_dimension_interference_converges() {
    // Capping the dominant tenant shifts share onto geo groups and back;
    // the sweep must repeat until both dimensions settle.
    let properties = vec![
        property(&[("tenant", "A"), ("geo", "SW"), ("IG?", "Y")], dec!(1000)),
        property(&[("tenant", "A"), ("geo", "MW"), ("IG?", "N")], dec!(1200)),
        property(&[("tenant", "B"), ("geo", "E"), ("IG?", "Y")], dec!(1100)),
        property(&[("tenant", "B"), ("geo", "W"), ("IG?", "N")], dec!(900)),
        property(&[("tenant", "C"), ("geo", "SW"), ("IG?", "N")], dec!(1300)),
        property(&[("tenant", "C"), ("geo", "E"), ("IG?", "Y")], dec!(1000)),
        property(&[("tenant", "D"), ("geo", "MW"), ("IG?", "Y")], dec!(800)),
        property(&[("tenant", "D"), ("geo", "W"), ("IG?", "N")], dec!(3000)),
    ];
    let limits = LimitTable::new()
        .with_limit("tenant", dec!(0.3))
        .with_limit("geo", dec!(0.3))
        .with_limit("IG?", dec!(0.6));

    let solved = solve(properties, &limits, &SolveConfig::default()).unwrap();

    assert_within_limits(&solved, &limits, 2);
    // Contributions only ever scale down
    for p in &solved {
        assert!(p.contribution.unwrap() <= p.value);
    }
}

#[test]
fn infeasible_limits_report_non_convergence() {
    // Three equal groups capped at 0.2 sum to 0.6 of the budget; some
    // group always holds at least a third, so no assignment satisfies
    // the table.
    let properties = vec![
        property(&[("tenant", "A")], dec!(1000)),
        property(&[("tenant", "B")], dec!(1000)),
        property(&[("tenant", "C")], dec!(1000)),
    ];
    let limits = LimitTable::new().with_limit("tenant", dec!(0.2));
    let config = SolveConfig::default();

    match solve(properties, &limits, &config) {
        Err(SolveError::NonConvergence { sweeps, .. }) => {
            assert!(sweeps <= config.max_sweeps);
        }
        other => panic!("expected NonConvergence, got {:?}", other),
    }
}

#[test]
fn missing_limit_is_fatal() {
    let properties = vec![property(&[("tenant", "A"), ("geo", "E")], dec!(1000))];
    let limits = LimitTable::new().with_limit("tenant", dec!(0.5));

    match solve(properties, &limits, &SolveConfig::default()) {
        Err(SolveError::MissingLimit { dimension }) => assert_eq!(dimension, "geo"),
        other => panic!("expected MissingLimit, got {:?}", other),
    }
}

#[test]
fn extra_limits_are_ignored() {
    // Limits for dimensions the portfolio does not carry are harmless.
    let properties = vec![
        property(&[("tenant", "A")], dec!(400)),
        property(&[("tenant", "B")], dec!(600)),
    ];
    let limits = LimitTable::new()
        .with_limit("tenant", dec!(0.7))
        .with_limit("rating", dec!(0.1));

    let solved = solve(properties, &limits, &SolveConfig::default()).unwrap();
    assert_eq!(solved.len(), 2);
}
