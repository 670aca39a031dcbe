//! JSON persistence for portfolios and limit tables.
//!
//! Properties are exchanged as a JSON array of flat records (attribute
//! name to value, plus `value` and, post-solve, `contribution`); limits as
//! a plain JSON object of dimension to fraction.

use anyhow::{Context, Result};
use concentra_core::{LimitTable, Property};
use std::fs;
use std::path::Path;

/// Loads a portfolio from a JSON file.
pub fn load_properties(path: &Path) -> Result<Vec<Property>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading portfolio file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("parsing portfolio file {}", path.display()))
}

/// Saves a portfolio to a JSON file.
pub fn save_properties(path: &Path, properties: &[Property]) -> Result<()> {
    let data = serde_json::to_string_pretty(properties)?;
    fs::write(path, data).with_context(|| format!("writing portfolio file {}", path.display()))
}

/// Loads a limit table from a JSON file.
pub fn load_limits(path: &Path) -> Result<LimitTable> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading limit file {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing limit file {}", path.display()))
}
