//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ralph-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `VersionControl`: Repository initialisation and commits
//!   - `ImportProvider`: Document conversion capabilities
//!   - `Reporter`: Progress output (implemented by the CLI)
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Filesystem, ImportProvider, ImportRequest, ProviderOutcome, Reporter, SilentReporter,
    VersionControl,
};

#[cfg(test)]
pub use output::{MockFilesystem, MockImportProvider, MockVersionControl};
