//! Application layer for Ralph.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService and its primitives)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Conflict resolution lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ImportBridge, Materializer, ScaffoldService, Scaffolder, VersionControlInitializer,
};

pub use ports::{
    Filesystem, ImportProvider, ImportRequest, ProviderOutcome, Reporter, SilentReporter,
    VersionControl,
};

pub use error::ApplicationError;
