//! Ralph Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Ralph
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │    ralph-cli (ralph-init, ralph-setup)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, Materializer, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, VersionControl, Import...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      ralph-adapters (Infrastructure)    │
//! │   (LocalFilesystem, GitCli, importers)  │
//! └─────────────────────────────────────────┘
//!
//!   Domain layer (pure): RunConfiguration, ConflictPolicy, layout, actions
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ralph_core::prelude::*;
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn VersionControl>) { unimplemented!() }
//!
//! let config = RunConfiguration::builder("/home/me/.ralph/templates", ".")
//!     .dry_run(true)
//!     .build()
//!     .unwrap();
//!
//! let (filesystem, version_control) = adapters();
//! let service = ScaffoldService::new(filesystem, version_control, ImportBridge::empty());
//! let report = service.init_in_place(&config, &SilentReporter).unwrap();
//! println!("{} actions planned", report.planned());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ImportBridge, ScaffoldService,
        ports::{
            Filesystem, ImportProvider, ImportRequest, ProviderOutcome, Reporter, SilentReporter,
            VersionControl,
        },
    };
    pub use crate::domain::{
        Action, ActionResult, ConversionInstruction, RunConfiguration, ScaffoldReport, Severity,
        Subject,
    };
    pub use crate::error::{ErrorCategory, RalphError, RalphResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
