use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the gridfilter CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "gridfilter")]
#[command(version, about = "Gridfilter CLI: Build, check and apply nested grid filters.")]
pub struct GridfilterCli {
    /// Path to a JSON column schema. Uses the built-in demo columns if not set.
    #[arg(short, long, global = true, env = "GRIDFILTER_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: GridfilterCliCommand,
}

/// Defines the available subcommands of the gridfilter CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum GridfilterCliCommand {
    /// List the schema's columns and the operators each one offers.
    Columns,
    /// Print the demo filter as a payload.
    Sample,
    /// Check a filter payload against the schema.
    Check {
        /// Filter payload file (JSON)
        filter: PathBuf,
    },
    /// Apply a filter payload to a list of records and print the matches.
    Apply {
        /// Filter payload file (JSON)
        filter: PathBuf,
        /// Records file (JSON array of objects)
        records: PathBuf,
    },
}
