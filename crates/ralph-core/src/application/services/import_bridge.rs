//! Document import through a prioritized chain of providers.
//!
//! Providers are tried in order. The first one that does not report
//! [`ProviderOutcome::Unavailable`] decides the outcome. When every provider
//! is unavailable the run fails with installation guidance.
//!
//! A missing source document is fatal and is checked up front, before any
//! scaffolding happens. A provider that runs and fails is only a warning.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ImportProvider, ImportRequest, ProviderOutcome, Reporter},
    },
    domain::{Action, ActionResult, RunConfiguration, Severity, Subject},
    error::RalphResult,
};

pub struct ImportBridge {
    providers: Vec<Box<dyn ImportProvider>>,
}

impl ImportBridge {
    /// Create a bridge trying `providers` in order.
    pub fn new(providers: Vec<Box<dyn ImportProvider>>) -> Self {
        Self { providers }
    }

    /// A bridge with no providers; any real import fails.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Fail if an import was requested for a file that does not exist.
    pub fn verify_source(
        &self,
        filesystem: &dyn Filesystem,
        config: &RunConfiguration,
    ) -> RalphResult<()> {
        if let Some(source) = config.resolved_import_source() {
            if !filesystem.is_file(&source) {
                return Err(ApplicationError::ImportSourceMissing {
                    path: config
                        .import_source()
                        .map(|p| p.to_path_buf())
                        .unwrap_or(source),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Run the import, if one was requested.
    ///
    /// Returns `None` when no import source is configured.
    #[instrument(skip_all)]
    pub fn run(
        &self,
        filesystem: &dyn Filesystem,
        config: &RunConfiguration,
        reporter: &dyn Reporter,
    ) -> RalphResult<Option<Action>> {
        let (Some(display), Some(source)) =
            (config.import_source(), config.resolved_import_source())
        else {
            return Ok(None);
        };
        self.verify_source(filesystem, config)?;

        let record = |result| Action::new(Subject::Import, display, result);

        if config.dry_run() {
            return Ok(Some(record(ActionResult::WouldCreate)));
        }

        let request = ImportRequest {
            source,
            destination_root: config.destination_root().to_path_buf(),
        };

        let mut unavailable = Vec::new();
        for provider in &self.providers {
            debug!(provider = provider.name(), "trying import provider");
            match provider.attempt(&request)? {
                ProviderOutcome::Completed => {
                    info!(provider = provider.name(), "import completed");
                    return Ok(Some(record(ActionResult::Created)));
                }
                ProviderOutcome::SoftFailure { reason } => {
                    return Ok(Some(record(ActionResult::failed(format!(
                        "{} reported failure: {reason}",
                        provider.name()
                    )))));
                }
                ProviderOutcome::Unavailable { reason } => {
                    reporter.notice(
                        Severity::Info,
                        &format!("{} unavailable: {reason}", provider.name()),
                    );
                    unavailable.push(format!("{}: {reason}", provider.name()));
                }
            }
        }

        Err(ApplicationError::NoConversionTool { tried: unavailable }.into())
    }
}
