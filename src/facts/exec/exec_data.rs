use crate::reports::Report;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Captured standard output keyed by the literal command string.
///
/// A command that failed to launch or exited unsuccessfully maps to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExecData {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub exec: BTreeMap<String, String>,
}

/// Trailing line breaks are dropped and every remaining line is indented by two spaces.
fn write_indented(w: &mut impl fmt::Write, output: &str) -> fmt::Result {
    for line in output.trim_end_matches(['\r', '\n']).split('\n') {
        writeln!(w, "  {}", line.trim_end_matches('\r'))?;
    }
    Ok(())
}

impl Report for ExecData {
    const NAME: &'static str = "exec";

    fn is_empty(&self) -> bool {
        self.exec.is_empty()
    }

    fn write_markdown(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "**Exec**")?;
        for (cmd, output) in &self.exec {
            writeln!(w, "- `{cmd}`")?;
            writeln!(w, "  ```")?;
            write_indented(w, output)?;
            writeln!(w, "  ```")?;
        }
        Ok(())
    }

    fn write_plaintext(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "Exec")?;
        writeln!(w, "----")?;
        for (cmd, output) in &self.exec {
            writeln!(w, "$ {cmd}")?;
            write_indented(w, output)?;
        }
        Ok(())
    }
}
