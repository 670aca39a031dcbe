//! Configuration for the concentration solver.

use serde::{Deserialize, Serialize};

/// Default maximum number of full sweeps across all dimensions.
pub const DEFAULT_MAX_SWEEPS: u32 = 32;

/// Default maximum iterations for a single dimension's water-filling loop.
pub const DEFAULT_MAX_REBALANCE_ITERATIONS: u32 = 64;

/// Default decimal digits used when comparing shares against limits.
pub const DEFAULT_SHARE_PRECISION: u32 = 2;

/// Configuration for a solve call.
///
/// Both iteration caps exist to turn pathological limit configurations into
/// a reported [`NonConvergence`](crate::SolveError::NonConvergence) instead
/// of an unbounded loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolveConfig {
    /// Maximum full sweeps across all dimensions before giving up.
    pub max_sweeps: u32,

    /// Maximum iterations of one dimension's water-filling loop.
    pub max_rebalance_iterations: u32,

    /// Decimal digits for share-versus-limit comparisons. Shares are
    /// rounded to this precision before being checked, so accumulated
    /// truncation below it never flips a passing check.
    pub share_precision: u32,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_MAX_SWEEPS,
            max_rebalance_iterations: DEFAULT_MAX_REBALANCE_ITERATIONS,
            share_precision: DEFAULT_SHARE_PRECISION,
        }
    }
}

impl SolveConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sweep cap.
    #[must_use]
    pub fn with_max_sweeps(mut self, max_sweeps: u32) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Sets the water-filling iteration cap.
    #[must_use]
    pub fn with_max_rebalance_iterations(mut self, max_iterations: u32) -> Self {
        self.max_rebalance_iterations = max_iterations;
        self
    }

    /// Sets the share comparison precision.
    #[must_use]
    pub fn with_share_precision(mut self, digits: u32) -> Self {
        self.share_precision = digits;
        self
    }
}
