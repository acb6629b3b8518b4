pub mod action;
pub mod common;
pub mod layout;
pub mod run_configuration;

pub use crate::domain::DomainError;
pub use action::{Action, ActionResult, ScaffoldReport, Severity, Subject};
pub use layout::{DirectorySpec, SpecsSeed, TemplateSpec};
pub use run_configuration::{RunConfiguration, RunConfigurationBuilder};
