//! Small wrapper around blocking subprocess calls.
//!
//! Every adapter that shells out goes through here so spawn failures and
//! non-zero exits surface uniformly as `ApplicationError::CommandFailed`.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use ralph_core::{application::ApplicationError, error::RalphResult};
use tracing::{debug, instrument};

/// Human-readable command line for logs and errors.
pub(crate) fn describe<S: AsRef<OsStr>>(program: impl AsRef<OsStr>, args: &[S]) -> String {
    std::iter::once(program.as_ref())
        .chain(args.iter().map(AsRef::as_ref))
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a command to completion and capture its output.
///
/// Only a spawn failure is an error; the exit status is left to the caller.
#[instrument(skip_all, fields(command = %describe(program.as_ref(), args)))]
pub(crate) fn run<S: AsRef<OsStr>>(
    program: impl AsRef<OsStr>,
    args: &[S],
    cwd: &Path,
) -> RalphResult<Output> {
    let output = Command::new(program.as_ref())
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| ApplicationError::CommandFailed {
            command: describe(program.as_ref(), args),
            reason: e.to_string(),
        })?;
    debug!(exit_code = ?output.status.code(), "command finished");
    Ok(output)
}

/// Like [`run`], but a non-zero exit is an error carrying stderr.
pub(crate) fn run_checked<S: AsRef<OsStr>>(
    program: impl AsRef<OsStr>,
    args: &[S],
    cwd: &Path,
) -> RalphResult<Output> {
    let output = run(program.as_ref(), args, cwd)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ApplicationError::CommandFailed {
            command: describe(program.as_ref(), args),
            reason: match stderr.trim() {
                "" => output.status.to_string(),
                text => text.to_string(),
            },
        }
        .into());
    }
    Ok(output)
}
