//! Implementation of `ralph-setup`.

use tracing::instrument;

use ralph_core::{application::ImportBridge, domain::RunConfiguration, error::RalphError};

use crate::{
    cli::SetupCli,
    config::RalphConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create `./<project_name>` and scaffold the Ralph layout into it.
#[instrument(skip_all, fields(project = %args.project_name))]
pub fn execute(args: &SetupCli, config: &RalphConfig, output: &OutputManager) -> CliResult<()> {
    let cwd =
        std::env::current_dir().with_cli_context(|| "Failed to read the current directory")?;
    let destination = cwd.join(&args.project_name);

    let run = RunConfiguration::builder(config.template_root(), &destination)
        .build()
        .map_err(RalphError::from)?;

    // New projects never import.
    let service = super::production_service(ImportBridge::empty());

    output.header(&format!("Setting up Ralph project '{}'", args.project_name))?;
    let report = service.create_project(&run, &args.project_name, output)?;

    output.summary(&report)?;
    output.next_steps(&[
        format!("cd {}", args.project_name),
        "Edit PROMPT.md to describe your project".into(),
        "Start the development loop: ralph --monitor".into(),
    ])?;

    Ok(())
}
