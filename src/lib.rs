//! envsnap crate
//!
//! Collects descriptive facts about a local development environment according to a
//! declarative `.envsnap` configuration and renders them as Markdown, plaintext, YAML,
//! or JSON.
//!
//! # Module Organization
//!
//! - [`config`]: Versioned configuration loading (local file or remote repository)
//! - [`facts`]: Source collectors, the per-run collection context and warning sink
//! - [`reports`]: Per-source result formatting and the aggregate snapshot
//! - [`commands`]: Command-line interface and render orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod config;
mod error;
pub mod facts;
pub mod reports;

pub use commands::{Host, run};
pub use error::Error;
