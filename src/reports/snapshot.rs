use super::{AnyReport, JsonView, OutputFormat, Report};
use crate::Error;
use crate::facts::{EnvironmentData, ExecData, GolangData, PythonData, SystemData};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::io::Write;

const LOG_TARGET: &str = "  snapshot";

fn absent_or_empty<T: Report>(value: &Option<T>) -> bool {
    value.as_ref().is_none_or(Report::is_empty)
}

fn json_entry<R: Report>(value: Option<&R>) -> Option<JsonView<'_, R>> {
    value.filter(|r| !r.is_empty()).map(JsonView)
}

/// The JSON shape of a [`Snapshot`], where each result uses its own JSON shape.
#[derive(Serialize)]
struct SnapshotJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<JsonView<'a, EnvironmentData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    exec: Option<JsonView<'a, ExecData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    golang: Option<JsonView<'a, GolangData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    python: Option<JsonView<'a, PythonData>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<JsonView<'a, SystemData>>,
}

/// One optional result per source, produced by a single render of a configuration.
///
/// A source that is not configured leaves its slot as `None`. Both an absent and an empty result
/// are omitted from every output format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "absent_or_empty")]
    pub environment: Option<EnvironmentData>,

    #[serde(default, skip_serializing_if = "absent_or_empty")]
    pub exec: Option<ExecData>,

    #[serde(default, skip_serializing_if = "absent_or_empty")]
    pub golang: Option<GolangData>,

    #[serde(default, skip_serializing_if = "absent_or_empty")]
    pub python: Option<PythonData>,

    #[serde(default, skip_serializing_if = "absent_or_empty")]
    pub system: Option<SystemData>,
}

impl Snapshot {
    /// The per-source results in rendering order: system, environment, exec, python, go.
    #[must_use]
    pub fn results(&self) -> [Option<AnyReport<'_>>; 5] {
        [
            self.system.as_ref().map(AnyReport::System),
            self.environment.as_ref().map(AnyReport::Environment),
            self.exec.as_ref().map(AnyReport::Exec),
            self.python.as_ref().map(AnyReport::Python),
            self.golang.as_ref().map(AnyReport::Golang),
        ]
    }

    fn present(&self) -> impl Iterator<Item = AnyReport<'_>> {
        self.results().into_iter().flatten().filter(|r| !r.is_empty())
    }

    fn json_view(&self) -> SnapshotJson<'_> {
        SnapshotJson {
            environment: json_entry(self.environment.as_ref()),
            exec: json_entry(self.exec.as_ref()),
            golang: json_entry(self.golang.as_ref()),
            python: json_entry(self.python.as_ref()),
            system: json_entry(self.system.as_ref()),
        }
    }

    /// Render the whole snapshot in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String, Error> {
        log::debug!(target: LOG_TARGET, "Rendering snapshot as {format}");

        match format {
            OutputFormat::Markdown => {
                let blocks = self.present().map(|r| r.markdown()).collect::<Result<Vec<_>, _>>()?;
                Ok(format!("#### Environment\n\n{}", blocks.join("\n")))
            }
            OutputFormat::Plaintext => {
                let blocks = self.present().map(|r| r.plaintext()).collect::<Result<Vec<_>, _>>()?;
                Ok(blocks.join("\n"))
            }
            OutputFormat::Yaml => Ok(serde_yaml::to_string(self)?),
            OutputFormat::Json => Ok(serde_json::to_string(&self.json_view())?),
        }
    }

    /// Render the snapshot in the named format.
    ///
    /// Accepts `markdown`/`md`, `plaintext`/`txt`, `yaml`, and `json`.
    pub fn serialize(&self, format: &str) -> Result<String, Error> {
        self.render(OutputFormat::parse(format)?)
    }

    /// Render and write to `path`, replacing any existing file.
    pub fn write(&self, path: &Utf8Path, format: OutputFormat) -> Result<(), Error> {
        let body = self.render(format)?;
        std::fs::write(path, body).map_err(|e| Error::io(path, e))
    }

    /// Render and write to `writer` followed by a newline.
    pub fn print(&self, writer: &mut impl Write, format: OutputFormat) -> Result<(), Error> {
        let body = self.render(format)?;
        writeln!(writer, "{body}").map_err(Error::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn system_only() -> Snapshot {
        Snapshot {
            system: Some(SystemData {
                os: Some("testOS".into()),
                ..SystemData::default()
            }),
            ..Snapshot::default()
        }
    }

    fn populated() -> Snapshot {
        Snapshot {
            system: Some(SystemData {
                os: Some("linux".into()),
                cpus: Some(4),
                ..SystemData::default()
            }),
            environment: Some(EnvironmentData {
                variables: BTreeMap::from([("FOO".to_string(), "bar".to_string())]),
            }),
            exec: Some(ExecData {
                exec: BTreeMap::from([("echo hello".to_string(), "hello\n".to_string())]),
            }),
            python: Some(PythonData {
                version: Some("3.8.1".into()),
                ..PythonData::default()
            }),
            golang: Some(GolangData {
                version: Some("go1.13".into()),
                ..GolangData::default()
            }),
        }
    }

    #[test]
    fn test_results_canonical_order() {
        let snapshot = populated();
        let names: Vec<_> = snapshot
            .results()
            .into_iter()
            .map(|r| match r {
                Some(AnyReport::System(_)) => "system",
                Some(AnyReport::Environment(_)) => "environment",
                Some(AnyReport::Exec(_)) => "exec",
                Some(AnyReport::Python(_)) => "python",
                Some(AnyReport::Golang(_)) => "golang",
                None => "none",
            })
            .collect();
        assert_eq!(names, ["system", "environment", "exec", "python", "golang"]);
    }

    #[test]
    fn test_results_absent() {
        assert!(Snapshot::default().results().iter().all(Option::is_none));
    }

    #[test]
    fn test_json_shape() {
        assert_eq!(system_only().serialize("json").unwrap(), r#"{"system":{"os":"testOS"}}"#);
    }

    #[test]
    fn test_json_keys_sorted() {
        let json = populated().serialize("json").unwrap();
        assert_eq!(
            json,
            r#"{"environment":{"env":{"FOO":"bar"}},"exec":{"exec":{"echo hello":"hello\n"}},"golang":{"version":"go1.13"},"python":{"version":"3.8.1"},"system":{"os":"linux","cpus":4}}"#
        );
    }

    #[test]
    fn test_environment_shape_differs_by_format() {
        let snapshot = Snapshot {
            environment: Some(EnvironmentData {
                variables: BTreeMap::from([("SHELL".to_string(), "zsh".to_string())]),
            }),
            ..Snapshot::default()
        };
        assert_eq!(snapshot.serialize("json").unwrap(), r#"{"environment":{"env":{"SHELL":"zsh"}}}"#);
        assert_eq!(snapshot.serialize("yaml").unwrap(), "environment:\n  SHELL: zsh\n");
    }

    #[test]
    fn test_yaml_shape() {
        assert_eq!(system_only().serialize("yaml").unwrap(), "system:\n  os: testOS\n");
    }

    #[test]
    fn test_markdown_shape() {
        assert_eq!(system_only().serialize("md").unwrap(), "#### Environment\n\n**System**\n- _os_: testOS\n");
    }

    #[test]
    fn test_markdown_blocks_in_order() {
        let expected = "#### Environment\n\n\
**System**\n- _os_: linux\n- _cpus_: 4\n\n\
**Environment**\n```\nFOO=bar\n```\n\n\
**Exec**\n- `echo hello`\n  ```\n  hello\n  ```\n\n\
**Python**\n- _version_: 3.8.1\n\n\
**Golang**\n- _version_: go1.13\n";
        assert_eq!(populated().serialize("markdown").unwrap(), expected);
    }

    #[test]
    fn test_plaintext_shape() {
        let snapshot = Snapshot {
            environment: Some(EnvironmentData {
                variables: BTreeMap::from([("FOO".to_string(), String::new())]),
            }),
            ..system_only()
        };
        assert_eq!(
            snapshot.serialize("txt").unwrap(),
            "System\n------\nos:             testOS\n\nEnvironment\n-----------\nFOO=\n"
        );
    }

    #[test]
    fn test_empty_results_suppressed() {
        let snapshot = Snapshot {
            system: Some(SystemData::default()),
            exec: Some(ExecData::default()),
            ..Snapshot::default()
        };

        assert_eq!(snapshot.serialize("md").unwrap(), "#### Environment\n\n");
        assert_eq!(snapshot.serialize("txt").unwrap(), "");
        assert_eq!(snapshot.serialize("json").unwrap(), "{}");
        assert_eq!(snapshot.serialize("yaml").unwrap(), "{}\n");
    }

    #[test]
    fn test_unsupported_format() {
        let err = system_only().serialize("bogus").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_print_appends_newline() {
        let mut out = Vec::new();
        system_only().print(&mut out, OutputFormat::Json).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"system\":{\"os\":\"testOS\"}}\n");
    }

    #[test]
    fn test_write_overwrites_without_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join("out.json")).unwrap();
        std::fs::write(&path, "previous contents that are longer").unwrap();

        system_only().write(&path, OutputFormat::Json).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"system":{"os":"testOS"}}"#);
    }

    #[test]
    fn test_yaml_round_trip() {
        let original = populated();
        let parsed: Snapshot = serde_yaml::from_str(&original.serialize("yaml").unwrap()).unwrap();
        assert_eq!(parsed, original);
    }
}
