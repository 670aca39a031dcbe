//! Concentra CLI - portfolio concentration limit solver.
//!
//! # Usage
//!
//! ```bash
//! # Generate a synthetic portfolio
//! concentra generate --count 40 --seed 7 --output portfolio.json
//!
//! # Solve contributions against a limit table
//! concentra solve --input portfolio.json --limits limits.json --output solved.json
//!
//! # Report totals and per-dimension shares
//! concentra report --input solved.json --format table
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod output;
mod store;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Set up output format
    let format = cli.format;
    let quiet = cli.quiet;

    // Execute command
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, format, quiet)?,
        Commands::Solve(args) => commands::solve::execute(args, format, quiet)?,
        Commands::Report(args) => commands::report::execute(args, format)?,
    }

    Ok(())
}
