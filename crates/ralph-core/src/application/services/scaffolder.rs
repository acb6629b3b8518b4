//! Idempotent directory creation.

use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::{Action, ActionResult, RelativePath, RunConfiguration, Subject},
    error::RalphResult,
};

/// Ensures directories exist under the destination root.
///
/// Safe to run any number of times: an existing directory is reported as
/// [`ActionResult::SkippedExisting`] and never touched.
pub struct Scaffolder<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Scaffolder<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Ensure a single directory exists.
    pub fn ensure(&self, config: &RunConfiguration, dir: &RelativePath) -> RalphResult<Action> {
        let path = dir.under(config.destination_root());

        let result = if self.filesystem.is_dir(&path) {
            ActionResult::SkippedExisting
        } else if config.dry_run() {
            ActionResult::WouldCreate
        } else {
            self.filesystem.create_dir_all(&path)?;
            ActionResult::Created
        };

        debug!(path = %dir, ?result, "directory ensured");
        Ok(Action::new(Subject::Directory, dir.as_path(), result))
    }
}
