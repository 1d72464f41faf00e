use anyhow::Context;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use sync_instructions::commands::sync::{run, suggestion_for};
use sync_instructions::{Cli, Config, SyncError, SyncStatus};
use tracing_subscriber::EnvFilter;

/// Exit code for argument errors clap reports itself
const USAGE_EXIT_CODE: u8 = 3;

/// Errors that are not a `SyncError`; kept clear of the 1/2 "files changed" codes
const UNKNOWN_ERROR_EXIT_CODE: u8 = 5;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version come through here too
            return if e.use_stderr() {
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match sync(cli) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            eprintln!("{}: {:#}", style("error").red().bold(), err);
            let sync_error = err.downcast_ref::<SyncError>();
            if let Some(hint) = sync_error.and_then(suggestion_for) {
                eprintln!("  Try: {hint}");
            }
            ExitCode::from(sync_error.map_or(UNKNOWN_ERROR_EXIT_CODE, SyncError::exit_code))
        }
    }
}

fn sync(cli: Cli) -> anyhow::Result<SyncStatus> {
    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;
    tracing::debug!(version = sync_instructions::VERSION, ?config, "configuration validated");

    let status = run(&config)
        .with_context(|| format!("failed to synchronize {}", config.directory.display()))?;
    Ok(status)
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
