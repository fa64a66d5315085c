use super::ConfigLocation;
use crate::Error;
use crate::facts::{
    CollectionContext, EnvironmentConfig, ExecConfig, GolangConfig, PythonConfig, Source, SourceKind, SystemConfig,
};
use crate::reports::Snapshot;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

const LOG_TARGET: &str = "    config";

static EMPTY_SYSTEM: SystemConfig = SystemConfig::EMPTY;
static EMPTY_ENVIRONMENT: EnvironmentConfig = EnvironmentConfig::EMPTY;
static EMPTY_EXEC: ExecConfig = ExecConfig::EMPTY;
static EMPTY_PYTHON: PythonConfig = PythonConfig::EMPTY;
static EMPTY_GOLANG: GolangConfig = GolangConfig::EMPTY;

/// The configuration schema versions envsnap understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigVersion {
    V1 = 1,
}

impl TryFrom<i64> for ConfigVersion {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Error> {
        match value {
            1 => Ok(Self::V1),
            other => Err(Error::InvalidConfigVersion(other)),
        }
    }
}

/// Only the discriminant, decoded ahead of the full document.
#[derive(Debug, Deserialize)]
struct VersionProbe {
    #[serde(default)]
    version: Option<i64>,
}

/// A parsed configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Config {
    V1(V1Config),
}

impl Config {
    /// Parse a configuration document.
    ///
    /// The `version` key is decoded first and selects the schema for the rest of the document.
    pub fn parse(text: &str) -> Result<Self, Error> {
        if text.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#')) {
            return Err(Error::NoConfigVersion);
        }

        let document: Value = serde_yaml::from_str(text)?;
        if document.is_null() {
            return Err(Error::NoConfigVersion);
        }

        let probe: VersionProbe = serde_yaml::from_value(document.clone())?;
        let version = ConfigVersion::try_from(probe.version.ok_or(Error::NoConfigVersion)?)?;
        log::debug!(target: LOG_TARGET, "Configuration declares version {}", version as i64);

        match version {
            ConfigVersion::V1 => Ok(Self::V1(serde_yaml::from_value(document)?)),
        }
    }

    /// Read and parse the configuration at `location`.
    pub async fn load(location: &ConfigLocation) -> Result<Self, Error> {
        let text = location.read().await?;
        Self::parse(&text)
    }

    #[must_use]
    pub const fn version(&self) -> ConfigVersion {
        match self {
            Self::V1(_) => ConfigVersion::V1,
        }
    }

    /// Every source fragment in rendering order, with unconfigured ones standing in as empty.
    #[must_use]
    pub fn all(&self) -> [SourceConfig<'_>; 5] {
        match self {
            Self::V1(v1) => v1.all(),
        }
    }

    /// Collect every configured source into a snapshot.
    ///
    /// The first source to fail with a hard error aborts the render; later sources do not run.
    pub async fn render(&self, ctx: &mut CollectionContext) -> Result<Snapshot, Error> {
        match self {
            Self::V1(v1) => v1.render(ctx).await,
        }
    }
}

/// Version 1 of the configuration schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct V1Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<PythonConfig>,

    #[serde(default, rename = "go", skip_serializing_if = "Option::is_none")]
    pub golang: Option<GolangConfig>,
}

impl V1Config {
    #[must_use]
    pub fn all(&self) -> [SourceConfig<'_>; 5] {
        [
            SourceConfig::System(self.system.as_ref().unwrap_or(&EMPTY_SYSTEM)),
            SourceConfig::Environment(self.environment.as_ref().unwrap_or(&EMPTY_ENVIRONMENT)),
            SourceConfig::Exec(self.exec.as_ref().unwrap_or(&EMPTY_EXEC)),
            SourceConfig::Python(self.python.as_ref().unwrap_or(&EMPTY_PYTHON)),
            SourceConfig::Golang(self.golang.as_ref().unwrap_or(&EMPTY_GOLANG)),
        ]
    }

    /// The fragments present in the document, in rendering order.
    fn configured(&self) -> impl Iterator<Item = SourceConfig<'_>> {
        [
            self.system.as_ref().map(SourceConfig::System),
            self.environment.as_ref().map(SourceConfig::Environment),
            self.exec.as_ref().map(SourceConfig::Exec),
            self.python.as_ref().map(SourceConfig::Python),
            self.golang.as_ref().map(SourceConfig::Golang),
        ]
        .into_iter()
        .flatten()
    }

    pub async fn render(&self, ctx: &mut CollectionContext) -> Result<Snapshot, Error> {
        let mut snapshot = Snapshot::default();
        for source in self.configured() {
            source.collect_into(ctx, &mut snapshot).await?;
        }
        Ok(snapshot)
    }
}

/// A borrowed configuration fragment for any one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceConfig<'a> {
    System(&'a SystemConfig),
    Environment(&'a EnvironmentConfig),
    Exec(&'a ExecConfig),
    Python(&'a PythonConfig),
    Golang(&'a GolangConfig),
}

impl SourceConfig<'_> {
    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        match self {
            Self::System(_) => SystemConfig::KIND,
            Self::Environment(_) => EnvironmentConfig::KIND,
            Self::Exec(_) => ExecConfig::KIND,
            Self::Python(_) => PythonConfig::KIND,
            Self::Golang(_) => GolangConfig::KIND,
        }
    }

    /// Collect this source into its slot in `snapshot`.
    ///
    /// The slot is filled even when collection stops on an unsupported option, so the partial
    /// result remains inspectable.
    pub async fn collect_into(&self, ctx: &mut CollectionContext, snapshot: &mut Snapshot) -> Result<(), Error> {
        log::debug!(target: LOG_TARGET, "Rendering source '{}'", self.kind());

        match *self {
            Self::System(cfg) => cfg.collect(ctx, snapshot.system.get_or_insert_default()).await,
            Self::Environment(cfg) => cfg.collect(ctx, snapshot.environment.get_or_insert_default()).await,
            Self::Exec(cfg) => cfg.collect(ctx, snapshot.exec.get_or_insert_default()).await,
            Self::Python(cfg) => cfg.collect(ctx, snapshot.python.get_or_insert_default()).await,
            Self::Golang(cfg) => cfg.collect(ctx, snapshot.golang.get_or_insert_default()).await,
        }
    }
}
