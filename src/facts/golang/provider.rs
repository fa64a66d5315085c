use super::GolangData;
use crate::Error;
use crate::facts::process::{bin_exists, field, normalize};
use crate::facts::{CollectionContext, Source, SourceKind};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "    golang";

/// The `go` configuration fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GolangConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub core: Vec<String>,
}

impl GolangConfig {
    pub const EMPTY: Self = Self { core: Vec::new() };
}

/// Run one `go` subcommand, extracting a value from its stdout.
///
/// Failures are recorded under `go.core.<option>` with `failure` as the message.
async fn query_go(
    ctx: &mut CollectionContext,
    option: &str,
    args: &[&str],
    failure: &str,
    extract: impl FnOnce(&[u8]) -> Option<String>,
) -> Option<String> {
    let source = format!("go.core.{option}");

    if !bin_exists("go") {
        ctx.warn(source, "go executable not found");
        return None;
    }

    let value = match ctx.run("go", args).await {
        Ok(output) => extract(&output.stdout),
        Err(e) => {
            log::debug!(target: LOG_TARGET, "Could not query go for '{option}': {e:#}");
            None
        }
    };

    if value.is_none() {
        ctx.warn(source, failure);
    }

    value
}

/// The `go1.x` token of `go version` output.
fn version_token(stdout: &[u8]) -> Option<String> {
    field(stdout, 2).filter(|v| !v.is_empty())
}

/// The value printed by `go env <VAR>`; an unset variable prints nothing.
fn env_value(stdout: &[u8]) -> Option<String> {
    Some(normalize(stdout)).filter(|v| !v.is_empty())
}

impl Source for GolangConfig {
    type Output = GolangData;

    const KIND: SourceKind = SourceKind::Golang;

    async fn collect(&self, ctx: &mut CollectionContext, out: &mut GolangData) -> Result<(), Error> {
        log::debug!(target: LOG_TARGET, "Starting collection of {} option(s)", self.core.len());

        for opt in &self.core {
            match opt.as_str() {
                "version" => {
                    out.version = query_go(ctx, "version", &["version"], "unable to determine version of go", version_token).await;
                }
                "goroot" => {
                    out.goroot = query_go(ctx, "goroot", &["env", "GOROOT"], "unable to determine GOROOT", env_value).await;
                }
                "gopath" => {
                    out.gopath = query_go(ctx, "gopath", &["env", "GOPATH"], "unable to determine GOPATH", env_value).await;
                }
                other => {
                    log::debug!(target: LOG_TARGET, "Unsupported option '{other}'");
                    return Err(Error::UnsupportedOption {
                        section: "go.core",
                        option: other.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Report;

    #[test]
    fn test_version_token() {
        assert_eq!(version_token(b"go version go1.13 linux/amd64\n").as_deref(), Some("go1.13"));
        assert_eq!(version_token(b"go version\n"), None);
        assert_eq!(version_token(b"go version  linux/amd64\n"), None);
    }

    #[test]
    fn test_env_value() {
        assert_eq!(env_value(b"/home/dev/go\n").as_deref(), Some("/home/dev/go"));
        assert_eq!(env_value(b"\n"), None);
        assert_eq!(env_value(b""), None);
    }

    fn config(opts: &[&str]) -> GolangConfig {
        GolangConfig {
            core: opts.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_empty_config() {
        let mut ctx = CollectionContext::new();
        let data = GolangConfig::EMPTY.render(&mut ctx).await.unwrap();
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_option() {
        let mut ctx = CollectionContext::new();
        let err = config(&["gobin"]).render(&mut ctx).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedOption { section: "go.core", ref option } if option == "gobin"));
    }

    #[tokio::test]
    async fn test_core_options() {
        let mut ctx = CollectionContext::new();
        let data = config(&["version", "goroot", "gopath"]).render(&mut ctx).await.unwrap();

        if bin_exists("go") {
            assert!(data.version.is_some_and(|v| v.starts_with("go")));
            assert!(data.goroot.is_some());
        } else {
            assert!(data.is_empty());
            for opt in ["version", "goroot", "gopath"] {
                assert_eq!(
                    ctx.warnings().get(&format!("go.core.{opt}")),
                    Some(&["go executable not found".to_string()][..])
                );
            }
        }
    }
}
