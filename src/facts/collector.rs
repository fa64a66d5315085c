use super::Warnings;
use super::process::run_command;
use crate::Error;
use crate::reports::Report;
use core::time::Duration;
use std::process::Output;
use strum::{Display, EnumIter, IntoStaticStr};

/// The fixed set of sources, in canonical rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum SourceKind {
    System,
    Environment,
    Exec,
    Python,
    #[strum(serialize = "go")]
    Golang,
}

/// State threaded through every collector during a single render.
///
/// The context owns the warning sink for the invocation, so separate renders never share
/// warnings and nothing needs to be reset between them.
#[derive(Debug, Default)]
pub struct CollectionContext {
    warnings: Warnings,
    timeout: Option<Duration>,
}

impl CollectionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound every subprocess spawned by a collector; a timed-out process counts as failed.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn warn(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.warnings.add(source, message);
    }

    #[must_use]
    pub const fn warnings(&self) -> &Warnings {
        &self.warnings
    }

    pub const fn warnings_mut(&mut self) -> &mut Warnings {
        &mut self.warnings
    }

    #[must_use]
    pub fn into_warnings(self) -> Warnings {
        self.warnings
    }

    pub(crate) async fn run(&self, program: &str, args: &[&str]) -> crate::Result<Output> {
        run_command(program, args, self.timeout).await
    }
}

/// A configuration fragment which knows how to collect its own facts.
///
/// Collection fills `out` option by option, in the order the options were configured. Runtime
/// failures (missing executables, failing commands) are recorded in the context and leave the
/// corresponding field unset. An option name the source does not know aborts collection with
/// [`Error::UnsupportedOption`]; whatever was collected before that point stays in `out`.
#[expect(async_fn_in_trait, reason = "collectors are only driven from this crate's own async pipeline")]
pub trait Source {
    type Output: Report + Default;

    const KIND: SourceKind;

    async fn collect(&self, ctx: &mut CollectionContext, out: &mut Self::Output) -> Result<(), Error>;

    /// Collect into a fresh, empty result.
    async fn render(&self, ctx: &mut CollectionContext) -> Result<Self::Output, Error> {
        let mut out = Self::Output::default();
        self.collect(ctx, &mut out).await?;
        Ok(out)
    }
}
