//! The dedicated `ralph-import` tool.
//!
//! Capability negotiation comes first: `<tool> --supports-in-place` exiting
//! 0 means in-place import is supported. Older tools without that flag are
//! probed by looking for `--in-place` in their `--help` text.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ralph_core::{
    application::ports::{ImportProvider, ImportRequest, ProviderOutcome},
    error::RalphResult,
};
use tracing::{debug, instrument, warn};

use crate::process::{describe, run};

pub const DEFAULT_IMPORT_TOOL: &str = "ralph-import";

const NEGOTIATE_FLAG: &str = "--supports-in-place";
const IN_PLACE_FLAG: &str = "--in-place";

#[derive(Debug, Clone)]
pub struct DedicatedImportTool {
    program: String,
}

impl DedicatedImportTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn supports_in_place(&self, executable: &Path, cwd: &Path) -> bool {
        match run(executable, &[NEGOTIATE_FLAG], cwd) {
            Ok(output) if output.status.success() => {
                debug!("in-place support negotiated");
                return true;
            }
            Ok(_) => debug!("negotiation flag rejected, probing help text"),
            Err(e) => {
                debug!(error = %e, "negotiation failed to run");
                return false;
            }
        }

        match run(executable, &["--help"], cwd) {
            Ok(output) => {
                String::from_utf8_lossy(&output.stdout).contains(IN_PLACE_FLAG)
                    || String::from_utf8_lossy(&output.stderr).contains(IN_PLACE_FLAG)
            }
            Err(_) => false,
        }
    }
}

impl Default for DedicatedImportTool {
    fn default() -> Self {
        Self::new(DEFAULT_IMPORT_TOOL)
    }
}

impl ImportProvider for DedicatedImportTool {
    fn name(&self) -> &'static str {
        "import tool"
    }

    #[instrument(skip_all, fields(tool = %self.program, source = %request.source.display()))]
    fn attempt(&self, request: &ImportRequest) -> RalphResult<ProviderOutcome> {
        let executable: PathBuf = match which::which(&self.program) {
            Ok(path) => path,
            Err(_) => {
                return Ok(ProviderOutcome::Unavailable {
                    reason: format!("`{}` not found on PATH", self.program),
                });
            }
        };

        if !self.supports_in_place(&executable, &request.destination_root) {
            return Ok(ProviderOutcome::Unavailable {
                reason: format!("`{}` does not support {IN_PLACE_FLAG}", self.program),
            });
        }

        let args = [OsStr::new(IN_PLACE_FLAG), request.source.as_os_str()];
        let output = match run(&executable, &args, &request.destination_root) {
            Ok(output) => output,
            Err(e) => {
                return Ok(ProviderOutcome::SoftFailure {
                    reason: e.to_string(),
                });
            }
        };

        if output.status.success() {
            Ok(ProviderOutcome::Completed)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(stderr = %stderr.trim(), "import tool failed");
            Ok(ProviderOutcome::SoftFailure {
                reason: format!(
                    "`{}` exited with {}",
                    describe(&self.program, &args),
                    output.status
                ),
            })
        }
    }
}
