//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{GenerateArgs, ReportArgs, SolveArgs};

/// Concentra - portfolio concentration limit solver CLI
#[derive(Parser)]
#[command(name = "concentra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic portfolio of attribute-tagged properties
    Generate(GenerateArgs),

    /// Solve a portfolio's contributions against a concentration limit table
    Solve(SolveArgs),

    /// Report totals and per-dimension contribution shares
    Report(ReportArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
