//! Repository initialisation guarded by existing-state detection.
//!
//! Two transitions only: `Absent -> Initialized` and `Present -> Present`.
//! Nothing here is fatal; a failing VCS degrades to a warning.

use tracing::{debug, info};

use crate::{
    application::ports::{Filesystem, VersionControl},
    domain::{Action, ActionResult, RunConfiguration, Subject, VCS_METADATA_DIR},
};

pub struct VersionControlInitializer<'a> {
    filesystem: &'a dyn Filesystem,
    version_control: &'a dyn VersionControl,
}

impl<'a> VersionControlInitializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, version_control: &'a dyn VersionControl) -> Self {
        Self {
            filesystem,
            version_control,
        }
    }

    /// Initialise a repository at the destination root unless one exists.
    pub fn initialize(&self, config: &RunConfiguration) -> Action {
        let record = |result| Action::new(Subject::VersionControl, VCS_METADATA_DIR, result);

        if config.skip_version_control() {
            return record(ActionResult::skipped("--no-git given"));
        }

        let metadata = config.destination_root().join(VCS_METADATA_DIR);
        if self.filesystem.exists(&metadata) {
            debug!(path = %metadata.display(), "repository already present");
            return record(ActionResult::SkippedExisting);
        }

        if config.dry_run() {
            return record(ActionResult::WouldCreate);
        }

        match self.version_control.init(config.destination_root()) {
            Ok(()) => {
                info!(root = %config.destination_root().display(), "repository initialized");
                record(ActionResult::Created)
            }
            Err(e) => record(ActionResult::failed(e.to_string())),
        }
    }

    /// Commit everything at the destination root.
    pub fn commit(&self, config: &RunConfiguration, message: &str) -> Action {
        let record = |result| Action::new(Subject::Commit, VCS_METADATA_DIR, result);

        if config.dry_run() {
            return record(ActionResult::WouldCreate);
        }

        match self
            .version_control
            .commit_all(config.destination_root(), message)
        {
            Ok(()) => record(ActionResult::Created),
            Err(e) => record(ActionResult::failed(e.to_string())),
        }
    }
}
