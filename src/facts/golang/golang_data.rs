use crate::reports::Report;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GolangData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goroot: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gopath: Option<String>,
}

impl GolangData {
    fn entries(&self) -> [(&'static str, Option<&String>); 3] {
        [
            ("version", self.version.as_ref()),
            ("goroot", self.goroot.as_ref()),
            ("gopath", self.gopath.as_ref()),
        ]
    }
}

impl Report for GolangData {
    const NAME: &'static str = "golang";

    fn is_empty(&self) -> bool {
        self.version.is_none() && self.goroot.is_none() && self.gopath.is_none()
    }

    fn write_markdown(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "**Golang**")?;
        for (label, value) in self.entries() {
            if let Some(value) = value {
                writeln!(w, "- _{label}_: {value}")?;
            }
        }
        Ok(())
    }

    fn write_plaintext(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "Golang")?;
        writeln!(w, "------")?;
        for (label, value) in self.entries() {
            if let Some(value) = value {
                writeln!(w, "{:<10}{value}", format!("{label}:"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> GolangData {
        GolangData {
            version: Some("go1.13".into()),
            goroot: Some("/usr/local/go".into()),
            gopath: Some("/home/dev/go".into()),
        }
    }

    #[test]
    fn test_markdown() {
        let expected = "**Golang**\n- _version_: go1.13\n- _goroot_: /usr/local/go\n- _gopath_: /home/dev/go\n";
        assert_eq!(populated().markdown().unwrap(), expected);
    }

    #[test]
    fn test_plaintext() {
        let expected = "Golang\n------\nversion:  go1.13\ngoroot:   /usr/local/go\ngopath:   /home/dev/go\n";
        assert_eq!(populated().plaintext().unwrap(), expected);
    }

    #[test]
    fn test_plaintext_partial() {
        let data = GolangData {
            gopath: Some("/tmp/go".into()),
            ..GolangData::default()
        };
        assert_eq!(data.plaintext().unwrap(), "Golang\n------\ngopath:   /tmp/go\n");
    }

    #[test]
    fn test_json() {
        assert_eq!(
            populated().json().unwrap(),
            r#"{"version":"go1.13","goroot":"/usr/local/go","gopath":"/home/dev/go"}"#
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let original = populated();
        let parsed: GolangData = serde_yaml::from_str(&original.yaml().unwrap()).unwrap();
        assert_eq!(parsed, original);
    }
}
