//! Infrastructure adapters for Ralph.
//!
//! This crate implements the ports defined in `ralph-core::application::ports`.
//! It contains all external dependencies and I/O operations: the local and
//! in-memory filesystems, the git CLI and the document import providers.

pub mod filesystem;
pub mod git;
pub mod import;

mod process;

#[cfg(all(test, unix))]
mod testing;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use git::GitCli;
pub use import::{DedicatedImportTool, GeneratorCommand, InlineConversion};
