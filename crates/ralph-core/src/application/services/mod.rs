//! Application services - orchestrate use cases.
//!
//! The small services each own one scaffolding primitive; the
//! [`ScaffoldService`] sequences them into the in-place and new-project flows.

pub mod import_bridge;
pub mod materializer;
pub mod scaffold_service;
pub mod scaffolder;
pub mod version_control;

pub use import_bridge::ImportBridge;
pub use materializer::Materializer;
pub use scaffold_service::ScaffoldService;
pub use scaffolder::Scaffolder;
pub use version_control::VersionControlInitializer;
