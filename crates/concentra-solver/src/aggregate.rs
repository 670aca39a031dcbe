//! Aggregation of contribution mass by attribute dimension.
//!
//! All functions here are pure: they take a property slice and return
//! sums or shares without modifying state. Group sums are ephemeral and
//! recomputed each pass; nothing is cached.

use concentra_core::{Property, SolveError, SolveResult};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Sums keyed by dimension name, then by attribute value.
pub type GroupedSums = BTreeMap<String, BTreeMap<String, Decimal>>;

/// Portfolio-level totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioTotals {
    /// Sum of the fixed `value` field across all properties.
    pub value_total: Decimal,

    /// Sum of contributions across all properties.
    pub contribution_total: Decimal,
}

/// Sums `value` and contribution independently across all properties.
///
/// Properties that have not been solved contribute their `value`.
///
/// # Errors
///
/// Returns [`SolveError::EmptyInput`] for an empty slice. Callers must
/// treat an empty portfolio as a no-op upstream rather than aggregate it.
pub fn totals(properties: &[Property]) -> SolveResult<PortfolioTotals> {
    if properties.is_empty() {
        return Err(SolveError::EmptyInput);
    }

    let mut value_total = Decimal::ZERO;
    let mut contribution_total = Decimal::ZERO;
    for property in properties {
        value_total += property.value;
        contribution_total += property.contribution_or_value();
    }

    Ok(PortfolioTotals {
        value_total,
        contribution_total,
    })
}

/// Buckets all properties by attribute value and sums contributions, for
/// every dimension present on the first property.
///
/// Precondition: all properties share the same dimension set. Behavior for
/// heterogeneous collections is undefined.
///
/// # Errors
///
/// Returns [`SolveError::EmptyInput`] for an empty slice.
pub fn group_sums(properties: &[Property]) -> SolveResult<GroupedSums> {
    let first = properties.first().ok_or(SolveError::EmptyInput)?;

    let mut grouped = GroupedSums::new();
    for dimension in first.dimensions() {
        grouped.insert(dimension.to_string(), dimension_sums(properties, dimension));
    }

    Ok(grouped)
}

/// The single-dimension projection of [`group_sums`], used inside the
/// solver's sweep.
#[must_use]
pub fn dimension_sums(properties: &[Property], dimension: &str) -> BTreeMap<String, Decimal> {
    let mut sums = BTreeMap::new();
    for property in properties {
        if let Some(attr_value) = property.attribute(dimension) {
            *sums.entry(attr_value.to_string()).or_insert(Decimal::ZERO) +=
                property.contribution_or_value();
        }
    }
    sums
}

/// Each group's share of the total contribution, rounded to `precision`
/// decimal digits for comparison stability against limits.
///
/// # Errors
///
/// Returns [`SolveError::EmptyInput`] for an empty slice and
/// [`SolveError::DivisionByZero`] if the contribution total is zero.
pub fn group_shares(properties: &[Property], precision: u32) -> SolveResult<GroupedSums> {
    let totals = totals(properties)?;
    if totals.contribution_total.is_zero() {
        return Err(SolveError::division_by_zero("group shares"));
    }

    let mut grouped = group_sums(properties)?;
    for bucket in grouped.values_mut() {
        for sum in bucket.values_mut() {
            *sum = (*sum / totals.contribution_total).round_dp(precision);
        }
    }

    Ok(grouped)
}
