//! # Concentra Solver
//!
//! Iterative concentration limit solver for attribute-tagged portfolios.
//!
//! Given a collection of properties, each carrying categorical attributes
//! and a monetary value, the solver assigns every property a contribution
//! weight such that no single attribute value's share of total contribution
//! exceeds its dimension's configured limit.
//!
//! Reducing one attribute value's share shifts mass onto the rest of the
//! portfolio, which can push other attribute values (on the same or other
//! dimensions) over their own limits, so the solver sweeps every dimension
//! repeatedly until a fixed point is reached - or fails with
//! [`NonConvergence`](SolveError::NonConvergence) at the configured caps.
//!
//! ## Quick Start
//!
//! ```rust
//! use concentra_solver::{group_shares, solve, LimitTable, PropertyBuilder, SolveConfig};
//! use rust_decimal_macros::dec;
//!
//! let properties = vec![
//!     PropertyBuilder::new()
//!         .attribute("tenant", "A")
//!         .value(dec!(7000))
//!         .build()?,
//!     PropertyBuilder::new()
//!         .attribute("tenant", "B")
//!         .value(dec!(3000))
//!         .build()?,
//! ];
//!
//! let limits = LimitTable::new().with_limit("tenant", dec!(0.5));
//! let config = SolveConfig::default();
//!
//! let solved = solve(properties, &limits, &config)?;
//! let shares = group_shares(&solved, config.share_precision)?;
//! assert!(shares["tenant"]["A"] <= dec!(0.5));
//! # Ok::<(), concentra_solver::SolveError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`aggregate`] - totals, group sums, and group shares per dimension
//! - [`rebalance`] - single-dimension water-filling against a limit
//! - [`redistribute`] - pro-rata application of targets onto contributions
//! - [`solve`](solve()) - the multi-dimension convergence driver

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aggregate;
pub mod rebalance;
pub mod redistribute;
mod solve;

/// Decimal digits kept for monetary amounts. Rebalanced targets and scaled
/// contributions truncate toward zero at this precision.
pub const AMOUNT_PRECISION: u32 = 2;

pub use aggregate::{dimension_sums, group_shares, group_sums, totals, GroupedSums, PortfolioTotals};
pub use rebalance::rebalance;
pub use redistribute::redistribute;
pub use solve::solve;

// Re-export the core model so callers need a single dependency
pub use concentra_core::{
    LimitTable, Property, PropertyBuilder, SolveConfig, SolveError, SolveResult,
};
