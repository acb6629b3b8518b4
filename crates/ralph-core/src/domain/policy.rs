//! Conflict resolution for template materialisation.
//!
//! Pure decision logic: given what exists and which flags are set, decide
//! what the materializer does. No I/O happens here.
//!
//! | destination exists | force | dry-run | decision         |
//! |--------------------|-------|---------|------------------|
//! | no                 |   -   |   no    | `Copy`           |
//! | no                 |   -   |   yes   | `PlanCopy`       |
//! | yes                | false |   -     | `Keep`           |
//! | yes                | true  |   no    | `Overwrite`      |
//! | yes                | true  |   yes   | `PlanOverwrite`  |

use crate::domain::entities::{ActionResult, RunConfiguration};

/// What to do with one template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDecision {
    Copy,
    PlanCopy,
    Keep,
    Overwrite,
    PlanOverwrite,
}

impl CopyDecision {
    /// Whether this decision touches the filesystem.
    pub fn performs_io(self) -> bool {
        matches!(self, Self::Copy | Self::Overwrite)
    }

    /// The result reported once the decision has been carried out.
    pub fn result(self) -> ActionResult {
        match self {
            Self::Copy => ActionResult::Created,
            Self::PlanCopy => ActionResult::WouldCreate,
            Self::Keep => ActionResult::SkippedExisting,
            Self::Overwrite => ActionResult::Overwrote,
            Self::PlanOverwrite => ActionResult::WouldOverwrite,
        }
    }
}

/// The force/dry-run pair that drives every copy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictPolicy {
    force: bool,
    dry_run: bool,
}

impl ConflictPolicy {
    pub const fn new(force: bool, dry_run: bool) -> Self {
        Self { force, dry_run }
    }

    pub fn from_config(config: &RunConfiguration) -> Self {
        Self::new(config.force(), config.dry_run())
    }

    /// Decide for a single template file.
    pub fn resolve(&self, destination_exists: bool) -> CopyDecision {
        match (destination_exists, self.force, self.dry_run) {
            (false, _, false) => CopyDecision::Copy,
            (false, _, true) => CopyDecision::PlanCopy,
            (true, false, _) => CopyDecision::Keep,
            (true, true, false) => CopyDecision::Overwrite,
            (true, true, true) => CopyDecision::PlanOverwrite,
        }
    }

    /// Decide whether the bulk specs seed is copied at all.
    ///
    /// Seeding only happens into a specs directory without files, unless
    /// forced.
    pub fn should_seed(&self, destination_has_files: bool) -> bool {
        !destination_has_files || self.force
    }
}
