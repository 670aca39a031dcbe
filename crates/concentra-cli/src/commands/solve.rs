//! Solve a portfolio's contributions against a limit table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use concentra_core::SolveConfig;
use concentra_solver::solve;

use crate::cli::OutputFormat;
use crate::commands::report::render;
use crate::output::print_success;
use crate::store;

/// Arguments for the solve command.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Input portfolio file
    #[arg(short, long, default_value = "portfolio.json")]
    pub input: PathBuf,

    /// Limit table file (JSON object: dimension -> fraction)
    #[arg(short, long)]
    pub limits: PathBuf,

    /// Output file for the solved portfolio
    #[arg(short, long, default_value = "solved.json")]
    pub output: PathBuf,

    /// Maximum full sweeps across all dimensions
    #[arg(long)]
    pub max_sweeps: Option<u32>,

    /// Decimal digits for share-versus-limit comparisons
    #[arg(long)]
    pub precision: Option<u32>,
}

/// Executes the solve command.
pub fn execute(args: SolveArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let properties = store::load_properties(&args.input)?;
    let limits = store::load_limits(&args.limits)?;

    let mut config = SolveConfig::default();
    if let Some(max_sweeps) = args.max_sweeps {
        config = config.with_max_sweeps(max_sweeps);
    }
    if let Some(precision) = args.precision {
        config = config.with_share_precision(precision);
    }

    let solved = solve(properties, &limits, &config)
        .with_context(|| format!("solving portfolio {}", args.input.display()))?;

    store::save_properties(&args.output, &solved)?;

    if !quiet {
        print_success(&format!(
            "Solved {} properties to {}",
            solved.len(),
            args.output.display()
        ));
    }

    render(&solved, format)
}
