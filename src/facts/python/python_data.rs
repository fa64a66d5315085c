use crate::reports::Report;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PythonData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub py2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub py3: Option<String>,

    /// Installed package versions keyed by the name pip reports.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,
}

impl PythonData {
    fn versions(&self) -> [(&'static str, Option<&String>); 3] {
        [
            ("version", self.version.as_ref()),
            ("py2", self.py2.as_ref()),
            ("py3", self.py3.as_ref()),
        ]
    }
}

impl Report for PythonData {
    const NAME: &'static str = "python";

    fn is_empty(&self) -> bool {
        self.version.is_none() && self.py2.is_none() && self.py3.is_none() && self.dependencies.is_empty()
    }

    fn write_markdown(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "**Python**")?;
        for (label, value) in self.versions() {
            if let Some(value) = value {
                writeln!(w, "- _{label}_: {value}")?;
            }
        }

        if !self.dependencies.is_empty() {
            writeln!(w, "- _dependencies_:")?;
            writeln!(w, "  ```")?;
            for (name, version) in &self.dependencies {
                writeln!(w, "  {name}=={version}")?;
            }
            writeln!(w, "  ```")?;
        }

        Ok(())
    }

    fn write_plaintext(&self, w: &mut impl fmt::Write) -> fmt::Result {
        writeln!(w, "Python")?;
        writeln!(w, "------")?;
        for (label, value) in self.versions() {
            if let Some(value) = value {
                writeln!(w, "{:<10}{value}", format!("{label}:"))?;
            }
        }

        if !self.dependencies.is_empty() {
            writeln!(w, "dependencies:")?;
            for (name, version) in &self.dependencies {
                writeln!(w, "- {name}=={version}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> PythonData {
        PythonData {
            version: Some("3.8.1".into()),
            py2: Some("2.7.17".into()),
            py3: Some("3.8.1".into()),
            dependencies: [("requests".to_string(), "2.22.0".to_string()), ("PyYAML".to_string(), "5.1".to_string())]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(PythonData::default().is_empty());
        assert!(!populated().is_empty());

        let deps_only = PythonData {
            dependencies: [("missing".to_string(), String::new())].into_iter().collect(),
            ..PythonData::default()
        };
        assert!(!deps_only.is_empty());
    }

    #[test]
    fn test_markdown() {
        let expected = "**Python**\n- _version_: 3.8.1\n- _py2_: 2.7.17\n- _py3_: 3.8.1\n- _dependencies_:\n  ```\n  PyYAML==5.1\n  requests==2.22.0\n  ```\n";
        assert_eq!(populated().markdown().unwrap(), expected);
    }

    #[test]
    fn test_markdown_version_only() {
        let data = PythonData {
            version: Some("3.8.1".into()),
            ..PythonData::default()
        };
        assert_eq!(data.markdown().unwrap(), "**Python**\n- _version_: 3.8.1\n");
    }

    #[test]
    fn test_plaintext() {
        let expected = "Python\n------\nversion:  3.8.1\npy2:      2.7.17\npy3:      3.8.1\ndependencies:\n- PyYAML==5.1\n- requests==2.22.0\n";
        assert_eq!(populated().plaintext().unwrap(), expected);
    }

    #[test]
    fn test_json() {
        let data = PythonData {
            py3: Some("3.8.1".into()),
            dependencies: [("six".to_string(), "1.13.0".to_string())].into_iter().collect(),
            ..PythonData::default()
        };
        assert_eq!(data.json().unwrap(), r#"{"py3":"3.8.1","dependencies":{"six":"1.13.0"}}"#);
    }

    #[test]
    fn test_yaml_round_trip() {
        let original = populated();
        let parsed: PythonData = serde_yaml::from_str(&original.yaml().unwrap()).unwrap();
        assert_eq!(parsed, original);
    }
}
