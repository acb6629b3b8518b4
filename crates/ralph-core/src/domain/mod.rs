//! Core domain layer for Ralph.
//!
//! This module contains pure scaffolding logic with ZERO external
//! dependencies. All filesystem, git and subprocess concerns are handled via
//! ports (traits) defined in the application layer.
//!
//! - **No I/O**: the conflict policy and layout are plain data and functions
//! - **Immutable configuration**: `RunConfiguration` is built once per run
//! - **No external crates**: only std library + thiserror

pub mod conversion;
pub mod entities;
pub mod error;
pub mod policy;

mod validation;

pub use conversion::ConversionInstruction;
pub use entities::{
    Action, ActionResult, DirectorySpec, RunConfiguration, RunConfigurationBuilder,
    ScaffoldReport, Severity, SpecsSeed, Subject, TemplateSpec,
    common::RelativePath,
    layout::{INITIAL_COMMIT_MESSAGE, README_FILE, VCS_METADATA_DIR},
};
pub use error::{DomainError, ErrorCategory};
pub use policy::{ConflictPolicy, CopyDecision};
pub use validation::DomainValidator;
