use super::PythonData;
use crate::Error;
use crate::facts::process::{bin_exists, field};
use crate::facts::{CollectionContext, Source, SourceKind};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "    python";

/// The `python` configuration fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PythonConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub core: Vec<String>,

    #[serde(default, skip_serializing_if = "DependenciesConfig::is_empty")]
    pub dependencies: DependenciesConfig,
}

/// Packages whose installed versions are reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DependenciesConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<String>,
}

impl DependenciesConfig {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PythonConfig {
    pub const EMPTY: Self = Self {
        core: Vec::new(),
        dependencies: DependenciesConfig { packages: Vec::new() },
    };
}

/// Run `<exe> --version` and pick the version token.
///
/// Python 2 writes its version banner to stderr, so stderr is consulted when stdout is blank.
async fn interpreter_version(ctx: &mut CollectionContext, exe: &str, option: &str) -> Option<String> {
    let source = format!("python.core.{option}");

    if !bin_exists(exe) {
        ctx.warn(source, format!("{exe} executable not found"));
        return None;
    }

    let version = match ctx.run(exe, &["--version"]).await {
        Ok(output) => banner_version(&output.stdout, &output.stderr),
        Err(e) => {
            log::debug!(target: LOG_TARGET, "Could not get {exe} version: {e:#}");
            None
        }
    };

    if version.is_none() {
        ctx.warn(source, format!("unable to determine version of {exe}"));
    }

    version
}

/// The version token of a `Python 3.8.1` banner, taken from stderr when stdout is blank.
fn banner_version(stdout: &[u8], stderr: &[u8]) -> Option<String> {
    let banner = if stdout.iter().all(u8::is_ascii_whitespace) { stderr } else { stdout };
    field(banner, 1).filter(|v| !v.is_empty())
}

/// Parse the `Name:` and `Version:` lines at the head of `pip show` output.
fn parse_pip_show(stdout: &[u8]) -> Option<(String, String)> {
    let text = String::from_utf8_lossy(stdout);
    let mut lines = text.lines();
    let name = field(lines.next()?.as_bytes(), 1).filter(|n| !n.is_empty())?;
    let version = field(lines.next()?.as_bytes(), 1)?;
    Some((name, version))
}

impl Source for PythonConfig {
    type Output = PythonData;

    const KIND: SourceKind = SourceKind::Python;

    async fn collect(&self, ctx: &mut CollectionContext, out: &mut PythonData) -> Result<(), Error> {
        log::debug!(target: LOG_TARGET, "Starting collection of {} option(s)", self.core.len());

        for opt in &self.core {
            match opt.as_str() {
                "version" => out.version = interpreter_version(ctx, "python", "version").await,
                "py2" => out.py2 = interpreter_version(ctx, "python2", "py2").await,
                "py3" => out.py3 = interpreter_version(ctx, "python3", "py3").await,
                other => {
                    log::debug!(target: LOG_TARGET, "Unsupported option '{other}'");
                    return Err(Error::UnsupportedOption {
                        section: "python.core",
                        option: other.to_string(),
                    });
                }
            }
        }

        if self.dependencies.is_empty() {
            return Ok(());
        }

        if !bin_exists("pip") {
            ctx.warn("python.dependencies.packages", "pip executable not found");
            return Ok(());
        }

        for package in &self.dependencies.packages {
            let listing = match ctx.run("pip", &["show", package.as_str()]).await {
                Ok(output) => parse_pip_show(&output.stdout),
                Err(e) => {
                    log::debug!(target: LOG_TARGET, "Could not inspect package '{package}': {e:#}");
                    None
                }
            };

            match listing {
                Some((name, version)) => {
                    let _ = out.dependencies.insert(name, version);
                }
                None => {
                    ctx.warn("python.dependencies.packages", format!("python dependency not found: '{package}'"));
                    let _ = out.dependencies.insert(package.clone(), String::new());
                }
            }
        }

        Ok(())
    }
}
