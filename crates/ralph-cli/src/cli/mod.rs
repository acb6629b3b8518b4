//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Project name used by `ralph-setup` when none is given.
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

// ── ralph-init ────────────────────────────────────────────────────────────────

/// Scaffold the Ralph layout into the current directory.
#[derive(Debug, Parser)]
#[command(
    name     = "ralph-init",
    bin_name = "ralph-init",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Add Ralph to an existing project",
    long_about = "Creates the Ralph directory layout and template files in the \
                  current directory. Existing files are never modified unless \
                  --force is given.",
    after_help = "EXAMPLES:\n\
        \x20 ralph-init\n\
        \x20 ralph-init --dry-run\n\
        \x20 ralph-init --import docs/PRD.md\n\
        \x20 ralph-init --force --no-git",
)]
pub struct InitCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Overwrite template files that already exist.
    #[arg(short = 'f', long = "force", help = "Overwrite existing template files")]
    pub force: bool,

    /// Convert a requirements document into Ralph format after scaffolding.
    ///
    /// Relative paths are resolved from the current directory.
    #[arg(
        short = 'i',
        long = "import",
        value_name = "FILE",
        value_parser = parse_import_source,
        allow_hyphen_values = true,
        help = "Import a PRD/spec document into Ralph format"
    )]
    pub import: Option<PathBuf>,

    /// Do not initialise a git repository.
    #[arg(long = "no-git", help = "Skip git repository initialization")]
    pub no_git: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be done without doing it")]
    pub dry_run: bool,
}

/// `--import` must name a file, never another flag.
fn parse_import_source(value: &str) -> Result<PathBuf, String> {
    if value.trim().is_empty() {
        return Err("--import requires a file path".into());
    }
    if value.starts_with('-') {
        return Err(format!(
            "'{value}' looks like an option; --import requires a file path \
             (use ./{value} for a file whose name starts with '-')"
        ));
    }
    Ok(PathBuf::from(value))
}

// ── ralph-setup ───────────────────────────────────────────────────────────────

/// Create a new project directory with the Ralph layout.
#[derive(Debug, Parser)]
#[command(
    name     = "ralph-setup",
    bin_name = "ralph-setup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new Ralph project",
    after_help = "EXAMPLES:\n\
        \x20 ralph-setup\n\
        \x20 ralph-setup my-service",
)]
pub struct SetupCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the directory to create in the current directory.
    #[arg(
        value_name = "PROJECT_NAME",
        default_value = DEFAULT_PROJECT_NAME,
        help = "Project directory name"
    )]
    pub project_name: String,
}
