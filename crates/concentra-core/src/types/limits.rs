//! Concentration limit tables.

use crate::error::{SolveError, SolveResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum allowed share of total contribution per attribute value, keyed
/// by dimension name.
///
/// Limits are fractions in the open interval (0, 1). The wire format is the
/// plain JSON object:
///
/// ```json
/// {"tenant": 0.3, "geo": 0.3, "IG?": 0.6}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitTable {
    limits: BTreeMap<String, Decimal>,
}

impl LimitTable {
    /// Creates an empty limit table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a limit for a dimension.
    #[must_use]
    pub fn with_limit(mut self, dimension: impl Into<String>, limit: Decimal) -> Self {
        self.limits.insert(dimension.into(), limit);
        self
    }

    /// Returns the limit configured for a dimension.
    #[must_use]
    pub fn get(&self, dimension: &str) -> Option<Decimal> {
        self.limits.get(dimension).copied()
    }

    /// Returns the limit for a dimension or fails.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MissingLimit`] if the dimension has no entry.
    pub fn require(&self, dimension: &str) -> SolveResult<Decimal> {
        self.get(dimension)
            .ok_or_else(|| SolveError::missing_limit(dimension))
    }

    /// Checks that every configured limit lies in (0, 1).
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidLimit`] for the first out-of-range entry.
    pub fn validate(&self) -> SolveResult<()> {
        for (dimension, &limit) in &self.limits {
            if limit <= Decimal::ZERO || limit >= Decimal::ONE {
                return Err(SolveError::invalid_limit(dimension, limit));
            }
        }
        Ok(())
    }

    /// Iterates over (dimension, limit) entries in sorted dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.limits.iter().map(|(d, &l)| (d.as_str(), l))
    }

    /// Returns the number of configured dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Returns true if no limits are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}
