use super::SystemData;
use super::probe::{Probe, SysInfo};
use crate::Error;
use crate::facts::{CollectionContext, Source, SourceKind};
use serde::{Deserialize, Serialize};
use std::thread::available_parallelism;

const LOG_TARGET: &str = "    system";

/// The `system` configuration fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SystemConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub core: Vec<String>,
}

impl SystemConfig {
    pub const EMPTY: Self = Self { core: Vec::new() };
}

/// The probe runs on first use and at most once per collection.
enum ProbeState {
    Pending(Probe),
    Loaded(SysInfo),
    Failed,
}

impl ProbeState {
    async fn get(&mut self, ctx: &mut CollectionContext) -> Option<&SysInfo> {
        if let Self::Pending(probe) = *self {
            *self = match probe.load(ctx).await {
                Some(info) => Self::Loaded(info),
                None => {
                    ctx.warn("system.core", "error collecting system info");
                    Self::Failed
                }
            };
        }

        match *self {
            Self::Loaded(ref info) => Some(info),
            Self::Pending(_) | Self::Failed => None,
        }
    }
}

impl Source for SystemConfig {
    type Output = SystemData;

    const KIND: SourceKind = SourceKind::System;

    async fn collect(&self, ctx: &mut CollectionContext, out: &mut SystemData) -> Result<(), Error> {
        self.collect_with(ctx, out, Probe::UNAME).await
    }
}

impl SystemConfig {
    async fn collect_with(&self, ctx: &mut CollectionContext, out: &mut SystemData, probe: Probe) -> Result<(), Error> {
        log::debug!(target: LOG_TARGET, "Starting collection of {} option(s)", self.core.len());

        let mut probe = ProbeState::Pending(probe);

        for opt in &self.core {
            match opt.as_str() {
                "cpus" => out.cpus = available_parallelism().ok().map(usize::from),
                "os" => out.os = probe.get(ctx).await.map(|info| info.os.clone()),
                "arch" => out.arch = probe.get(ctx).await.map(|info| info.arch.clone()),
                "kernel" => out.kernel = probe.get(ctx).await.map(|info| info.kernel.clone()),
                "kernel_version" | "kernel-version" => {
                    out.kernel_version = probe.get(ctx).await.map(|info| info.kernel_version.clone());
                }
                "processor" => out.processor = probe.get(ctx).await.map(|info| info.processor.clone()),
                other => {
                    log::debug!(target: LOG_TARGET, "Unsupported option '{other}'");
                    return Err(Error::UnsupportedOption {
                        section: "system.core",
                        option: other.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
