//! Multi-format rendering of collected facts
//!
//! Every source result implements [`Report`], which fixes one behavioral contract across the
//! four output encodings: Markdown, plaintext, YAML, and JSON. The only structural rule shared
//! by all of them is emptiness: a result whose fields are all absent renders to an empty
//! string in every format, so no format ever emits a bare heading or a `null` placeholder.
//!
//! [`Snapshot`] aggregates one optional result per source and serializes them together,
//! in canonical order for the text formats and keyed by source name for YAML and JSON.

mod snapshot;

pub use snapshot::Snapshot;

use crate::Error;
use crate::facts::{EnvironmentData, ExecData, GolangData, PythonData, SystemData};
use core::fmt;
use core::str::FromStr;
use serde::{Serialize, Serializer};
use strum::{Display, EnumString};

const LOG_TARGET: &str = "   reports";

/// The encodings a snapshot can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[strum(serialize = "markdown", serialize = "md")]
    Markdown,
    #[strum(serialize = "plaintext", serialize = "txt")]
    Plaintext,
    Yaml,
    Json,
}

impl OutputFormat {
    /// Parse a user-supplied format name, reporting unknown names as [`Error::UnsupportedFormat`].
    pub fn parse(name: &str) -> Result<Self, Error> {
        Self::from_str(name).map_err(|_err| Error::UnsupportedFormat(name.to_string()))
    }
}

/// The per-source rendering contract.
pub trait Report: Serialize {
    /// Label used in debug logging.
    const NAME: &'static str;

    /// True when every field is at its absent value.
    fn is_empty(&self) -> bool;

    fn write_markdown(&self, w: &mut impl fmt::Write) -> fmt::Result;

    fn write_plaintext(&self, w: &mut impl fmt::Write) -> fmt::Result;

    /// Serialize the JSON shape of this result, which defaults to the YAML shape.
    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn markdown(&self) -> Result<String, Error> {
        log::debug!(target: LOG_TARGET, "Rendering {} to markdown", Self::NAME);
        let mut s = String::new();
        if !self.is_empty() {
            self.write_markdown(&mut s)?;
        }
        Ok(s)
    }

    fn plaintext(&self) -> Result<String, Error> {
        log::debug!(target: LOG_TARGET, "Rendering {} to plaintext", Self::NAME);
        let mut s = String::new();
        if !self.is_empty() {
            self.write_plaintext(&mut s)?;
        }
        Ok(s)
    }

    fn yaml(&self) -> Result<String, Error> {
        log::debug!(target: LOG_TARGET, "Rendering {} to YAML", Self::NAME);
        if self.is_empty() {
            return Ok(String::new());
        }
        Ok(serde_yaml::to_string(self)?)
    }

    fn json(&self) -> Result<String, Error> {
        log::debug!(target: LOG_TARGET, "Rendering {} to JSON", Self::NAME);
        if self.is_empty() {
            return Ok(String::new());
        }
        Ok(serde_json::to_string(&JsonView(self))?)
    }

    fn render(&self, format: OutputFormat) -> Result<String, Error> {
        match format {
            OutputFormat::Markdown => self.markdown(),
            OutputFormat::Plaintext => self.plaintext(),
            OutputFormat::Yaml => self.yaml(),
            OutputFormat::Json => self.json(),
        }
    }
}

/// Routes serialization through [`Report::serialize_json`].
#[derive(Debug)]
pub(crate) struct JsonView<'a, R: ?Sized>(pub &'a R);

impl<R: Report + ?Sized> Serialize for JsonView<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize_json(serializer)
    }
}

/// A borrowed view of any one source result.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum AnyReport<'a> {
    System(&'a SystemData),
    Environment(&'a EnvironmentData),
    Exec(&'a ExecData),
    Python(&'a PythonData),
    Golang(&'a GolangData),
}

impl Report for AnyReport<'_> {
    const NAME: &'static str = "result";

    fn is_empty(&self) -> bool {
        match self {
            Self::System(r) => r.is_empty(),
            Self::Environment(r) => r.is_empty(),
            Self::Exec(r) => r.is_empty(),
            Self::Python(r) => r.is_empty(),
            Self::Golang(r) => r.is_empty(),
        }
    }

    fn write_markdown(&self, w: &mut impl fmt::Write) -> fmt::Result {
        match self {
            Self::System(r) => r.write_markdown(w),
            Self::Environment(r) => r.write_markdown(w),
            Self::Exec(r) => r.write_markdown(w),
            Self::Python(r) => r.write_markdown(w),
            Self::Golang(r) => r.write_markdown(w),
        }
    }

    fn write_plaintext(&self, w: &mut impl fmt::Write) -> fmt::Result {
        match self {
            Self::System(r) => r.write_plaintext(w),
            Self::Environment(r) => r.write_plaintext(w),
            Self::Exec(r) => r.write_plaintext(w),
            Self::Python(r) => r.write_plaintext(w),
            Self::Golang(r) => r.write_plaintext(w),
        }
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::System(r) => r.serialize_json(serializer),
            Self::Environment(r) => r.serialize_json(serializer),
            Self::Exec(r) => r.serialize_json(serializer),
            Self::Python(r) => r.serialize_json(serializer),
            Self::Golang(r) => r.serialize_json(serializer),
        }
    }
}
