use super::EnvironmentData;
use crate::Error;
use crate::facts::{CollectionContext, Source, SourceKind};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "       env";

/// The `environment` configuration fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnvironmentConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<String>,
}

impl EnvironmentConfig {
    pub const EMPTY: Self = Self { variables: Vec::new() };
}

impl Source for EnvironmentConfig {
    type Output = EnvironmentData;

    const KIND: SourceKind = SourceKind::Environment;

    async fn collect(&self, _ctx: &mut CollectionContext, out: &mut EnvironmentData) -> Result<(), Error> {
        log::debug!(target: LOG_TARGET, "Starting collection of {} variable(s)", self.variables.len());

        for name in &self.variables {
            let value = std::env::var_os(name).map(|v| v.to_string_lossy().into_owned()).unwrap_or_default();
            let _ = out.variables.insert(name.clone(), value);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Report;

    #[tokio::test]
    async fn test_unset_variable_is_empty_string() {
        let mut ctx = CollectionContext::new();
        let cfg = EnvironmentConfig {
            variables: vec!["ENVSNAP_TEST_SURELY_UNSET_VARIABLE".into()],
        };

        let data = cfg.render(&mut ctx).await.unwrap();
        assert_eq!(data.variables.get("ENVSNAP_TEST_SURELY_UNSET_VARIABLE").map(String::as_str), Some(""));
        assert!(!data.is_empty());
        assert!(!ctx.warnings().has_warnings());
    }

    #[tokio::test]
    async fn test_set_variable() {
        let mut ctx = CollectionContext::new();
        let cfg = EnvironmentConfig {
            variables: vec!["PATH".into()],
        };

        let data = cfg.render(&mut ctx).await.unwrap();
        assert_eq!(data.variables["PATH"], std::env::var("PATH").unwrap_or_default());
    }

    #[tokio::test]
    async fn test_empty_config() {
        let mut ctx = CollectionContext::new();
        let data = EnvironmentConfig::EMPTY.render(&mut ctx).await.unwrap();
        assert!(data.is_empty());
    }
}
