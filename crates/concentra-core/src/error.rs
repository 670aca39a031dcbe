//! Error types for concentration solving.
//!
//! This module defines the error taxonomy used throughout the Concentra
//! crates.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Errors that can occur while solving concentration limits.
#[derive(Error, Debug, Clone)]
pub enum SolveError {
    /// The property collection is empty.
    ///
    /// Recoverable: callers should treat an empty portfolio as a vacuous
    /// success upstream instead of aggregating it.
    #[error("Portfolio has no properties")]
    EmptyInput,

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A dimension present on the properties has no configured limit.
    #[error("No concentration limit configured for dimension '{dimension}'")]
    MissingLimit {
        /// The dimension without a limit entry.
        dimension: String,
    },

    /// A configured limit is outside the open interval (0, 1).
    #[error("Invalid limit for dimension '{dimension}': {value} (must be in (0, 1))")]
    InvalidLimit {
        /// The dimension carrying the invalid limit.
        dimension: String,
        /// The invalid limit value.
        value: Decimal,
    },

    /// The sweep cap was reached without satisfying every limit.
    #[error("Limits not satisfied after {sweeps} sweeps (worst excess: {worst_excess})")]
    NonConvergence {
        /// Number of sweeps performed.
        sweeps: u32,
        /// Largest share-over-limit excess at the last check.
        worst_excess: Decimal,
    },

    /// Division by zero in aggregation.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that failed.
        operation: String,
    },
}

impl SolveError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a missing limit error.
    #[must_use]
    pub fn missing_limit(dimension: impl Into<String>) -> Self {
        Self::MissingLimit {
            dimension: dimension.into(),
        }
    }

    /// Create an invalid limit error.
    #[must_use]
    pub fn invalid_limit(dimension: impl Into<String>, value: Decimal) -> Self {
        Self::InvalidLimit {
            dimension: dimension.into(),
            value,
        }
    }

    /// Create a non-convergence error.
    #[must_use]
    pub fn non_convergence(sweeps: u32, worst_excess: Decimal) -> Self {
        Self::NonConvergence {
            sweeps,
            worst_excess,
        }
    }

    /// Create a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Returns true if the caller may treat this error as a vacuous success.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}
