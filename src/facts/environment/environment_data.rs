use crate::reports::Report;
use core::fmt;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Environment variable values keyed by name. An unset variable maps to an empty string.
///
/// YAML places the variables directly under the result; JSON nests them under `env`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EnvironmentData {
    pub variables: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct EnvironmentJson<'a> {
    env: &'a BTreeMap<String, String>,
}

impl Report for EnvironmentData {
    const NAME: &'static str = "environment";

    fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    fn write_markdown(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "**Environment**")?;
        writeln!(w, "```")?;
        for (key, value) in &self.variables {
            writeln!(w, "{key}={value}")?;
        }
        writeln!(w, "```")
    }

    fn write_plaintext(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "Environment")?;
        writeln!(w, "-----------")?;
        for (key, value) in &self.variables {
            writeln!(w, "{key}={value}")?;
        }
        Ok(())
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EnvironmentJson { env: &self.variables }.serialize(serializer)
    }
}
