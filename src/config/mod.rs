//! Loading and parsing of `.envsnap` configuration documents
//!
//! A document is versioned: its `version` key is decoded on its own first, then the
//! whole document is decoded into the schema for that version. Only version 1 exists.
//!
//! The document can come from a local file or from a GitHub repository, see
//! [`ConfigLocation`].

#[expect(clippy::module_inception, reason = "the Config type lives in config/config.rs")]
mod config;
mod location;
mod repo_ref;

pub use config::{Config, ConfigVersion, SourceConfig, V1Config};
pub use location::{CONFIG_FILE, ConfigLocation};
pub use repo_ref::RepoRef;
