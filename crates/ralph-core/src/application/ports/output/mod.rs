//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ralph-adapters` crate provides implementations; the CLI provides the
//! [`Reporter`].

use std::path::{Path, PathBuf};

use crate::domain::{Action, Severity};
use crate::error::RalphResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ralph_adapters::filesystem::LocalFilesystem` (production)
/// - `ralph_adapters::filesystem::MemoryFilesystem` (testing)
///
/// There is no removal operation: scaffolding never deletes.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> RalphResult<()>;

    /// Copy a file, replacing the destination if it exists.
    fn copy_file(&self, from: &Path, to: &Path) -> RalphResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> RalphResult<()>;

    /// All regular files beneath `root`, recursively, relative to `root`
    /// and sorted.
    fn list_files(&self, root: &Path) -> RalphResult<Vec<PathBuf>>;
}

/// Port for the version-control system.
///
/// Implemented by:
/// - `ralph_adapters::git::GitCli`
///
/// Detection of an existing repository is done by the initializer through
/// the [`Filesystem`] port, not here.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Initialise a repository at `root`.
    fn init(&self, root: &Path) -> RalphResult<()>;

    /// Stage everything under `root` and commit it.
    fn commit_all(&self, root: &Path, message: &str) -> RalphResult<()>;
}

/// What a conversion provider should import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// Resolved path of the document to convert.
    pub source: PathBuf,
    /// Directory the converted files land in.
    pub destination_root: PathBuf,
}

/// Uniform result of one provider in the import chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    /// The provider converted the document.
    Completed,
    /// The provider cannot run here; try the next one.
    Unavailable { reason: String },
    /// The provider ran but reported failure; the chain stops.
    SoftFailure { reason: String },
}

/// Port for one document-conversion capability.
///
/// Implemented by:
/// - `ralph_adapters::import::DedicatedImportTool` (a separate import CLI)
/// - `ralph_adapters::import::InlineConversion` (a generative text tool)
#[cfg_attr(test, mockall::automock)]
pub trait ImportProvider: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Try to convert the document.
    ///
    /// `Err` is reserved for conditions that should abort the whole run.
    fn attempt(&self, request: &ImportRequest) -> RalphResult<ProviderOutcome>;
}

/// Port for live progress reporting.
///
/// Called once per action as the run progresses, and for free-form notices.
/// Reporting cannot fail: a broken terminal must not abort scaffolding.
pub trait Reporter {
    fn action(&self, action: &Action);

    fn notice(&self, severity: Severity, message: &str);
}

/// A [`Reporter`] that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn action(&self, _action: &Action) {}

    fn notice(&self, _severity: Severity, _message: &str) {}
}
