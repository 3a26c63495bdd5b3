mod cli;
mod commands;
mod errors;
mod files;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cli::{GridfilterCli, GridfilterCliCommand};
use errors::CliError;

fn main() -> ExitCode {
    let cli = GridfilterCli::parse();
    initialize_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Exiting with {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: GridfilterCli) -> Result<(), CliError> {
    let schema = files::load_schema(cli.schema.as_deref())?;

    match cli.command {
        GridfilterCliCommand::Columns => commands::list_columns(&schema, cli.format),
        GridfilterCliCommand::Sample => commands::print_sample(schema, cli.format),
        GridfilterCliCommand::Check { filter } => {
            commands::check_filter(&filter, &schema, cli.format)
        }
        GridfilterCliCommand::Apply { filter, records } => {
            commands::apply_filter(&filter, &records, &schema, cli.format)
        }
    }
}

/// Logs go to stderr. `--verbose` shows debug logs, otherwise `RUST_LOG`
/// applies on top of warnings.
fn initialize_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr);

    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}
