//! The per-invocation run configuration.

use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Everything a scaffolding run needs to know, fixed at parse time.
///
/// Built once per invocation through [`RunConfigurationBuilder`] and then
/// passed by reference to every service. There are no setters: flags cannot
/// change halfway through a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    force: bool,
    dry_run: bool,
    skip_version_control: bool,
    import_source: Option<PathBuf>,
    template_root: PathBuf,
    destination_root: PathBuf,
}

impl RunConfiguration {
    /// Start building a configuration for the given roots.
    pub fn builder(
        template_root: impl Into<PathBuf>,
        destination_root: impl Into<PathBuf>,
    ) -> RunConfigurationBuilder {
        RunConfigurationBuilder {
            force: false,
            dry_run: false,
            skip_version_control: false,
            import_source: None,
            template_root: template_root.into(),
            destination_root: destination_root.into(),
        }
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn skip_version_control(&self) -> bool {
        self.skip_version_control
    }

    /// The import source exactly as the user supplied it.
    pub fn import_source(&self) -> Option<&Path> {
        self.import_source.as_deref()
    }

    /// The import source resolved against the destination root.
    ///
    /// Absolute sources are returned unchanged.
    pub fn resolved_import_source(&self) -> Option<PathBuf> {
        self.import_source
            .as_ref()
            .map(|source| self.destination_root.join(source))
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }
}

/// Builder for [`RunConfiguration`].
#[derive(Debug, Clone)]
pub struct RunConfigurationBuilder {
    force: bool,
    dry_run: bool,
    skip_version_control: bool,
    import_source: Option<PathBuf>,
    template_root: PathBuf,
    destination_root: PathBuf,
}

impl RunConfigurationBuilder {
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn skip_version_control(mut self, skip: bool) -> Self {
        self.skip_version_control = skip;
        self
    }

    pub fn import_source(mut self, source: Option<PathBuf>) -> Self {
        self.import_source = source;
        self
    }

    /// Finish the configuration.
    ///
    /// Fails when either root is empty or when the import source is an
    /// empty path.
    pub fn build(self) -> Result<RunConfiguration, DomainError> {
        if self.template_root.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "template root cannot be empty".into(),
            ));
        }
        if self.destination_root.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "destination root cannot be empty".into(),
            ));
        }
        if self
            .import_source
            .as_ref()
            .is_some_and(|source| source.as_os_str().is_empty())
        {
            return Err(DomainError::InvalidConfiguration(
                "import source cannot be empty".into(),
            ));
        }

        Ok(RunConfiguration {
            force: self.force,
            dry_run: self.dry_run,
            skip_version_control: self.skip_version_control,
            import_source: self.import_source,
            template_root: self.template_root,
            destination_root: self.destination_root,
        })
    }
}
