//! Modgen Core - scaffolding logic for Atelier C++ modules.
//!
//! This crate holds everything the `modgen` binary needs except actual
//! I/O: variant configurations, plan resolution, the scaffold pipeline,
//! and the [`Filesystem`] port the pipeline drives.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           modgen-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            Scaffolder service           │
//! │     (validate → mkdir → substitute)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Filesystem port (trait)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      modgen-adapters (Local/Memory)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The pipeline is deliberately linear and non-transactional: any
//! failure aborts the run and leaves earlier directories and files in
//! place, matching the one-shot interactive use the tool is built for.

pub mod config;
pub mod error;
pub mod plan;
pub mod ports;
pub mod scaffolder;
pub mod variants;

pub use config::{ScaffoldConfig, ScaffoldRequest, TemplateFile};
pub use error::{ErrorCategory, ScaffoldError, ScaffoldResult};
pub use plan::{PlannedFile, ScaffoldPlan};
pub use ports::Filesystem;
pub use scaffolder::Scaffolder;
