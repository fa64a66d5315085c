use crate::reports::Report;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SystemData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpus: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
}

impl SystemData {
    fn entries(&self) -> [(&'static str, Option<String>); 6] {
        [
            ("os", self.os.clone()),
            ("arch", self.arch.clone()),
            ("cpus", self.cpus.map(|n| n.to_string())),
            ("kernel", self.kernel.clone()),
            ("kernel version", self.kernel_version.clone()),
            ("processor", self.processor.clone()),
        ]
    }
}

impl Report for SystemData {
    const NAME: &'static str = "system";

    fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_none())
    }

    fn write_markdown(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "**System**")?;
        for (label, value) in self.entries() {
            if let Some(value) = value {
                writeln!(w, "- _{label}_: {value}")?;
            }
        }
        Ok(())
    }

    fn write_plaintext(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "System")?;
        writeln!(w, "------")?;
        for (label, value) in self.entries() {
            if let Some(value) = value {
                writeln!(w, "{:<16}{value}", format!("{label}:"))?;
            }
        }
        Ok(())
    }
}
