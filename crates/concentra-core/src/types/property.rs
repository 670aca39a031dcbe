//! Property records - the entities being weighted.

use crate::error::{SolveError, SolveResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One portfolio item being weighted.
///
/// A property carries a set of categorical attributes (dimension name to
/// attribute value), a fixed nominal `value`, and a `contribution` weight
/// assigned by the solver.
///
/// The wire format is a flat record: attribute keys sit alongside `value`
/// and (post-solve) `contribution`:
///
/// ```json
/// {"tenant": "A", "geo": "SW", "value": 1234.0, "contribution": 987.5}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Categorical attribute values keyed by dimension name.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,

    /// Nominal size of the property. Fixed at construction; the solver
    /// never modifies it.
    pub value: Decimal,

    /// Working weight redistributed by the solver. `None` until a solve
    /// initializes it from `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contribution: Option<Decimal>,
}

impl Property {
    /// Returns this property's value on the given dimension.
    #[must_use]
    pub fn attribute(&self, dimension: &str) -> Option<&str> {
        self.attributes.get(dimension).map(String::as_str)
    }

    /// Returns the dimension names in sorted order.
    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Returns the contribution, falling back to `value` for properties
    /// that have not been solved yet. Aggregation and reporting use this
    /// so they work on both raw and solved portfolios.
    #[must_use]
    pub fn contribution_or_value(&self) -> Decimal {
        self.contribution.unwrap_or(self.value)
    }
}

/// Builder for [`Property`].
///
/// `value` is required; `build` fails with [`SolveError::MissingField`]
/// when it was never set.
///
/// # Example
///
/// ```rust
/// use concentra_core::types::PropertyBuilder;
/// use rust_decimal_macros::dec;
///
/// let property = PropertyBuilder::new()
///     .attribute("tenant", "A")
///     .attribute("geo", "SW")
///     .value(dec!(1500))
///     .build()
///     .unwrap();
///
/// assert_eq!(property.attribute("tenant"), Some("A"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyBuilder {
    attributes: BTreeMap<String, String>,
    value: Option<Decimal>,
}

impl PropertyBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute value on the given dimension.
    #[must_use]
    pub fn attribute(mut self, dimension: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(dimension.into(), value.into());
        self
    }

    /// Sets the nominal value.
    #[must_use]
    pub fn value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    /// Builds the property.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MissingField`] if `value` was not set.
    pub fn build(self) -> SolveResult<Property> {
        let value = self.value.ok_or_else(|| SolveError::missing_field("value"))?;

        Ok(Property {
            attributes: self.attributes,
            value,
            contribution: None,
        })
    }
}
