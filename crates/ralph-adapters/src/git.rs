//! Git adapter: `git` subprocess calls behind the `VersionControl` port.

use std::path::Path;

use ralph_core::{application::ports::VersionControl, error::RalphResult};
use tracing::{debug, instrument};

use crate::process::run_checked;

/// Drives the `git` executable found on PATH.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn init(&self, root: &Path) -> RalphResult<()> {
        run_checked(&self.program, &["init", "--quiet"], root)?;
        debug!("git init finished");
        Ok(())
    }

    #[instrument(skip_all, fields(root = %root.display()))]
    fn commit_all(&self, root: &Path, message: &str) -> RalphResult<()> {
        run_checked(&self.program, &["add", "--all"], root)?;
        run_checked(&self.program, &["commit", "--quiet", "-m", message], root)?;
        debug!("commit created");
        Ok(())
    }
}
