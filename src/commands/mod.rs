//! Command-line interface and orchestration for envsnap
//!
//! Two commands are provided:
//!
//! - **init**: write a boilerplate `.envsnap` configuration, optionally with sections for
//!   Python and Go
//! - **render**: load a configuration, collect every configured source, and emit the snapshot
//!   as Markdown, plaintext, YAML, or JSON
//!
//! All console I/O goes through the [`Host`] trait so commands can be driven from tests.
//! Logging and color handling are configured once from the global `--log-level` and
//! `--color` flags.

mod common;
mod host;
mod init;
mod render;
mod run;

pub use common::{ColorMode, LogLevel};
pub use host::Host;
pub use init::{InitArgs, Lang, boilerplate, init_config, write_config};
pub use render::{RenderArgs, render_snapshot};
pub use run::run;
