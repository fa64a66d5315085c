//! Collection of environment facts
//!
//! This module turns configuration fragments into typed results. Five sources are compiled
//! in, each living in its own sub-module with the same two halves:
//!
//! - a `provider` holding the configuration fragment, which implements [`Source`]
//! - a `*_data` holding the typed result, which implements [`Report`](crate::reports::Report)
//!
//! # Failure Model
//!
//! Collection distinguishes two severities. A configuration authoring mistake, such as an
//! option name the source does not know, aborts collection with
//! [`Error::UnsupportedOption`](crate::Error::UnsupportedOption). A runtime failure, such as a
//! missing executable or a command exiting with an error, is recorded in the
//! [`CollectionContext`]'s [`Warnings`] under the dotted path of the option that failed, and the
//! corresponding result field is left unset.
//!
//! Collection is sequential: sources run one after another, options within a source run in
//! configuration order, and each subprocess is awaited before the next is started.

mod collector;
mod environment;
mod exec;
mod golang;
pub mod process;
mod python;
mod system;
mod warnings;

pub use collector::{CollectionContext, Source, SourceKind};
pub use environment::{EnvironmentConfig, EnvironmentData};
pub use exec::{ExecConfig, ExecData};
pub use golang::{GolangConfig, GolangData};
pub use python::{DependenciesConfig, PythonConfig, PythonData};
pub use system::{SystemConfig, SystemData};
pub use warnings::Warnings;
