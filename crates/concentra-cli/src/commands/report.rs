//! Report totals and per-dimension contribution shares.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use concentra_core::types::DEFAULT_SHARE_PRECISION;
use concentra_core::Property;
use concentra_solver::{group_shares, group_sums, totals};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::output::{format_percent, print_header, print_output};

/// Arguments for the report command.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Portfolio file to report on (raw or solved)
    #[arg(short, long, default_value = "solved.json")]
    pub input: PathBuf,
}

/// One attribute value's contribution and share of the total.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ShareRow {
    /// Attribute dimension name.
    #[tabled(rename = "Dimension")]
    pub dimension: String,

    /// Attribute value within the dimension.
    #[tabled(rename = "Value")]
    pub value: String,

    /// Group contribution sum.
    #[tabled(rename = "Contribution")]
    pub contribution: Decimal,

    /// Share of total contribution.
    #[tabled(rename = "Share")]
    pub share: String,
}

/// Portfolio-level totals row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct TotalsRow {
    /// Metric name.
    #[tabled(rename = "Metric")]
    pub metric: String,

    /// Metric amount.
    #[tabled(rename = "Amount")]
    pub amount: Decimal,
}

/// Executes the report command.
pub fn execute(args: ReportArgs, format: OutputFormat) -> Result<()> {
    let properties = crate::store::load_properties(&args.input)?;
    render(&properties, format)
}

/// Renders totals and per-dimension shares for a portfolio.
///
/// Table format prints both sections; JSON, CSV, and minimal formats emit
/// the share rows only.
pub fn render(properties: &[Property], format: OutputFormat) -> Result<()> {
    if properties.is_empty() {
        println!("No properties.");
        return Ok(());
    }

    let portfolio_totals = totals(properties)?;
    let sums = group_sums(properties)?;
    let shares = group_shares(properties, DEFAULT_SHARE_PRECISION)?;

    let mut share_rows = Vec::new();
    for (dimension, bucket) in &sums {
        for (attr_value, sum) in bucket {
            let share = shares[dimension][attr_value];
            share_rows.push(ShareRow {
                dimension: dimension.clone(),
                value: attr_value.clone(),
                contribution: *sum,
                share: format_percent(share),
            });
        }
    }

    match format {
        OutputFormat::Table => {
            let totals_rows = vec![
                TotalsRow {
                    metric: "Portfolio value".to_string(),
                    amount: portfolio_totals.value_total,
                },
                TotalsRow {
                    metric: "Total contribution".to_string(),
                    amount: portfolio_totals.contribution_total,
                },
            ];

            print_header("Totals");
            print_output(&totals_rows, format)?;
            print_header("Concentration");
            print_output(&share_rows, format)?;
        }
        _ => print_output(&share_rows, format)?,
    }

    Ok(())
}
