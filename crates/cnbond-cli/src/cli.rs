//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{FuturesArgs, PriceArgs};

/// cnbond - Chinese government bond and treasury-bond futures analytics CLI.
#[derive(Parser)]
#[command(name = "cnbond")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format.
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Price a bond from a known YTM.
    Price(PriceArgs),
    /// Evaluate a treasury-bond futures contract against a deliverable bond.
    Futures(FuturesArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// CSV format.
    Csv,
    /// Minimal output (just the value).
    Minimal,
}
