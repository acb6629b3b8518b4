//! Implementation of `ralph-init`.
//!
//! Responsibility: resolve the current directory, build the run
//! configuration, run the in-place scaffold and display results.

use tracing::{debug, instrument};

use ralph_core::{
    application::ImportBridge,
    domain::{ActionResult, RunConfiguration, Subject},
    error::RalphError,
};

use crate::{
    cli::InitCli,
    config::RalphConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute `ralph-init` in the current working directory.
#[instrument(skip_all, fields(dry_run = args.dry_run, force = args.force))]
pub fn execute(args: &InitCli, config: &RalphConfig, output: &OutputManager) -> CliResult<()> {
    let destination =
        std::env::current_dir().with_cli_context(|| "Failed to read the current directory")?;

    let run = RunConfiguration::builder(config.template_root(), &destination)
        .force(args.force)
        .dry_run(args.dry_run)
        .skip_version_control(args.no_git)
        .import_source(args.import.clone())
        .build()
        .map_err(RalphError::from)?;

    debug!(
        template_root = %run.template_root().display(),
        destination = %destination.display(),
        "Run configuration resolved"
    );

    let service = super::production_service(ImportBridge::new(config.import_providers()));

    output.header("Initializing Ralph in the current directory")?;
    let report = service.init_in_place(&run, output)?;

    output.summary(&report)?;

    let imported = report
        .find(Subject::Import)
        .is_some_and(|a| a.result == ActionResult::Created);
    output.next_steps(&next_steps(imported))?;

    Ok(())
}

fn next_steps(imported: bool) -> Vec<String> {
    let mut steps = Vec::new();
    if imported {
        steps.push("Review the converted PROMPT.md, @fix_plan.md and specs/requirements.md".into());
    } else {
        steps.push("Edit PROMPT.md to describe your project".into());
        steps.push("Add specifications under specs/".into());
    }
    steps.push("Prioritize the work in @fix_plan.md".into());
    steps.push("Start the development loop: ralph --monitor".into());
    steps
}
