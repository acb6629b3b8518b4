//! Scaffold Service - main application orchestrator.
//!
//! Two use cases share the same primitives:
//!
//! - **In-place init**: verify preconditions, initialise the repository,
//!   scaffold directories, materialize templates, seed specs, then import.
//! - **New project**: create the project directory first, then the same
//!   steps with the new-project layout, a README and an initial commit.
//!
//! Every fatal precondition is checked before the first mutation. Each
//! primitive's [`Action`] is streamed to the [`Reporter`] as it happens and
//! collected into the returned [`ScaffoldReport`].

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter, VersionControl},
        services::{ImportBridge, Materializer, Scaffolder, VersionControlInitializer},
    },
    domain::{
        Action, ActionResult, DirectorySpec, DomainValidator as validator, INITIAL_COMMIT_MESSAGE,
        README_FILE, RunConfiguration, ScaffoldReport, SpecsSeed, Subject, TemplateSpec,
    },
    error::RalphResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    version_control: Box<dyn VersionControl>,
    import: ImportBridge,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ralph_core::application::{ImportBridge, ScaffoldService};
    /// # fn adapters() -> (Box<dyn ralph_core::application::ports::Filesystem>,
    /// #     Box<dyn ralph_core::application::ports::VersionControl>) { unimplemented!() }
    /// let (filesystem, version_control) = adapters();
    ///
    /// let service = ScaffoldService::new(filesystem, version_control, ImportBridge::empty());
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        version_control: Box<dyn VersionControl>,
        import: ImportBridge,
    ) -> Self {
        Self {
            filesystem,
            version_control,
            import,
        }
    }

    /// Scaffold the Ralph layout into an existing directory.
    #[instrument(
        skip_all,
        fields(
            destination = %config.destination_root().display(),
            dry_run = config.dry_run(),
            force = config.force()
        )
    )]
    pub fn init_in_place(
        &self,
        config: &RunConfiguration,
        reporter: &dyn Reporter,
    ) -> RalphResult<ScaffoldReport> {
        validator::validate_run_configuration(config)?;
        self.verify_template_root(config)?;
        self.import.verify_source(self.filesystem.as_ref(), config)?;

        let mut run = Run::new(reporter);
        let vcs = VersionControlInitializer::new(
            self.filesystem.as_ref(),
            self.version_control.as_ref(),
        );

        run.record(vcs.initialize(config));
        self.scaffold_layout(config, &DirectorySpec::in_place(), &mut run)?;

        if let Some(action) = self.import.run(self.filesystem.as_ref(), config, reporter)? {
            run.record(action);
        }

        info!(
            changed = run.report.changed(),
            failed = run.report.failed(),
            "in-place init finished"
        );
        Ok(run.report)
    }

    /// Create a new project directory and scaffold the Ralph layout into it.
    ///
    /// `config.destination_root()` is the project directory itself.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            destination = %config.destination_root().display(),
            dry_run = config.dry_run()
        )
    )]
    pub fn create_project(
        &self,
        config: &RunConfiguration,
        project_name: &str,
        reporter: &dyn Reporter,
    ) -> RalphResult<ScaffoldReport> {
        validator::validate_project_name(project_name)?;
        validator::validate_run_configuration(config)?;
        self.verify_template_root(config)?;

        let mut run = Run::new(reporter);
        run.record(self.ensure_project_root(config, project_name)?);

        let vcs = VersionControlInitializer::new(
            self.filesystem.as_ref(),
            self.version_control.as_ref(),
        );
        let initialized = vcs.initialize(config);
        let commit_afterwards = matches!(
            initialized.result,
            ActionResult::Created | ActionResult::WouldCreate
        );
        run.record(initialized);

        self.scaffold_layout(config, &DirectorySpec::new_project(), &mut run)?;
        run.record(self.write_readme(config, project_name)?);

        if commit_afterwards {
            run.record(vcs.commit(config, INITIAL_COMMIT_MESSAGE));
        }

        info!(
            changed = run.report.changed(),
            failed = run.report.failed(),
            "project created"
        );
        Ok(run.report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn verify_template_root(&self, config: &RunConfiguration) -> RalphResult<()> {
        if self.filesystem.is_dir(config.template_root()) {
            Ok(())
        } else {
            Err(ApplicationError::TemplateRootMissing {
                path: config.template_root().to_path_buf(),
            }
            .into())
        }
    }

    /// Directories, single-file templates and the specs seed, in that order.
    fn scaffold_layout(
        &self,
        config: &RunConfiguration,
        directories: &DirectorySpec,
        run: &mut Run<'_>,
    ) -> RalphResult<()> {
        let scaffolder = Scaffolder::new(self.filesystem.as_ref());
        for dir in directories.iter() {
            run.record(scaffolder.ensure(config, dir)?);
        }

        let materializer = Materializer::new(self.filesystem.as_ref());
        for template in TemplateSpec::standard() {
            run.record(materializer.materialize(config, &template)?);
        }
        run.record(materializer.seed_specs(config, &SpecsSeed::standard())?);
        Ok(())
    }

    fn ensure_project_root(
        &self,
        config: &RunConfiguration,
        project_name: &str,
    ) -> RalphResult<Action> {
        let root = config.destination_root();
        let result = if self.filesystem.is_dir(root) {
            ActionResult::SkippedExisting
        } else if config.dry_run() {
            ActionResult::WouldCreate
        } else {
            self.filesystem.create_dir_all(root)?;
            ActionResult::Created
        };
        Ok(Action::new(Subject::ProjectRoot, project_name, result))
    }

    fn write_readme(&self, config: &RunConfiguration, project_name: &str) -> RalphResult<Action> {
        let path = config.destination_root().join(README_FILE);
        let result = if self.filesystem.exists(&path) {
            ActionResult::SkippedExisting
        } else if config.dry_run() {
            ActionResult::WouldCreate
        } else {
            self.filesystem
                .write_file(&path, &format!("# {project_name}\n"))?;
            ActionResult::Created
        };
        Ok(Action::new(Subject::Readme, README_FILE, result))
    }
}

/// Streams actions to the reporter while collecting them.
struct Run<'r> {
    reporter: &'r dyn Reporter,
    report: ScaffoldReport,
}

impl<'r> Run<'r> {
    fn new(reporter: &'r dyn Reporter) -> Self {
        Self {
            reporter,
            report: ScaffoldReport::new(),
        }
    }

    fn record(&mut self, action: Action) {
        self.reporter.action(&action);
        self.report.push(action);
    }
}
