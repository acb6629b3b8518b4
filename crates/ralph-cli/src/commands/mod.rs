//! Command handlers, one per binary.
//!
//! Each handler translates parsed arguments into a `RunConfiguration`, wires
//! the production adapters into a `ScaffoldService` and prints the result.

pub mod init;
pub mod setup;

use ralph_adapters::{GitCli, LocalFilesystem};
use ralph_core::application::{ImportBridge, ScaffoldService};

/// The service as the binaries run it: real filesystem, git on `PATH`.
fn production_service(import: ImportBridge) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(GitCli::new()),
        import,
    )
}
