use super::ExecData;
use crate::Error;
use crate::facts::{CollectionContext, Source, SourceKind};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "      exec";

/// The `exec` configuration fragment.
///
/// Each command is split on whitespace into a program and its arguments and run without a
/// shell, so quoting and pipes are not interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExecConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub run: Vec<String>,
}

impl ExecConfig {
    pub const EMPTY: Self = Self { run: Vec::new() };
}

impl Source for ExecConfig {
    type Output = ExecData;

    const KIND: SourceKind = SourceKind::Exec;

    async fn collect(&self, ctx: &mut CollectionContext, out: &mut ExecData) -> Result<(), Error> {
        log::debug!(target: LOG_TARGET, "Starting collection of {} command(s)", self.run.len());

        for cmd in &self.run {
            let mut parts = cmd.split_whitespace();
            let result = match parts.next() {
                Some(program) => {
                    let args: Vec<&str> = parts.collect();
                    ctx.run(program, &args).await
                }
                None => Err(ohno::app_err!("empty command")),
            };

            let stdout = match result {
                Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
                Err(e) => {
                    log::debug!(target: LOG_TARGET, "Command '{cmd}' failed: {e:#}");
                    ctx.warn("exec.run", format!("error while running command: '{cmd}'"));
                    String::new()
                }
            };

            let _ = out.exec.insert(cmd.clone(), stdout);
        }

        Ok(())
    }
}
