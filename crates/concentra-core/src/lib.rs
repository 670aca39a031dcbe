//! # Concentra Core
//!
//! Data model and error types for the Concentra concentration limit solver.
//!
//! A portfolio is a collection of [`Property`] records, each carrying a set
//! of categorical attributes (tenant, region, ...), a fixed monetary
//! `value`, and a `contribution` weight assigned by the solver. A
//! [`LimitTable`] caps the share of total contribution any single attribute
//! value may hold on its dimension.
//!
//! ## Quick Start
//!
//! ```rust
//! use concentra_core::{LimitTable, PropertyBuilder, SolveConfig};
//! use rust_decimal_macros::dec;
//!
//! let property = PropertyBuilder::new()
//!     .attribute("tenant", "A")
//!     .attribute("geo", "SW")
//!     .value(dec!(1500))
//!     .build()?;
//!
//! let limits = LimitTable::new()
//!     .with_limit("tenant", dec!(0.3))
//!     .with_limit("geo", dec!(0.3));
//! limits.validate()?;
//!
//! let config = SolveConfig::default();
//! # assert_eq!(config.share_precision, 2);
//! # Ok::<(), concentra_core::SolveError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod types;

// Re-export error types at crate root
pub use error::{SolveError, SolveResult};

// Re-export main types
pub use types::{LimitTable, Property, PropertyBuilder, SolveConfig};
