//! # Ralph CLI
//!
//! Shared plumbing for the `ralph-init` and `ralph-setup` binaries.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (`--help` / `--version` exit early with 0).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`](output::OutputManager).
//! 5. Run the command handler.
//! 6. Translate any [`CliError`](error::CliError) into a user-facing message.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success, dry-run, `--help`, `--version`   |
//! |  1   | Any fatal error, including bad arguments  |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

use crate::{
    cli::GlobalArgs,
    config::RalphConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

/// Parse arguments, turning clap's own exits into an [`ExitCode`].
pub fn parse_args<C: Parser>() -> Result<C, ExitCode> {
    C::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Initialise logging and load configuration.
///
/// Failures are reported through `output` before returning the exit code.
pub fn bootstrap(global: &GlobalArgs, output: &OutputManager) -> Result<RalphConfig, ExitCode> {
    if let Err(e) = init_logging(global) {
        let _ = output.error(&format!("Failed to initialise logging: {e}"));
        return Err(ExitCode::FAILURE);
    }

    debug!(
        verbose = global.verbose,
        quiet = global.quiet,
        no_color = global.no_color,
        "CLI started"
    );

    RalphConfig::load().map_err(|e| finish(Err(CliError::from(e)), global, output))
}

/// Report the outcome of a command and pick the exit code.
///
/// A fatal error becomes one `[ERROR]` line on stderr followed by its
/// causes and suggestions.
pub fn finish(result: CliResult<()>, global: &GlobalArgs, output: &OutputManager) -> ExitCode {
    let err = match result {
        Ok(()) => {
            info!("Ralph completed successfully");
            return ExitCode::SUCCESS;
        }
        Err(err) => err,
    };

    err.log();

    let verbose = global.verbose > 0;
    let details = if output.supports_color() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    let _ = output.error(&err.to_string());
    let _ = output.error_details(&details);

    ExitCode::from(err.exit_code())
}
