//! Platform information probe backing the `system` source.

use crate::facts::CollectionContext;
use crate::facts::process::fields;

const LOG_TARGET: &str = "    system";

/// Facts reported by the platform probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysInfo {
    pub os: String,
    pub kernel: String,
    pub kernel_version: String,
    pub arch: String,
    pub processor: String,
}

impl SysInfo {
    /// Build from `uname -srmp` output: kernel name, kernel release, machine, processor.
    pub fn from_uname(stdout: &[u8]) -> Option<Self> {
        let tokens = fields(stdout);
        let [kernel, kernel_version, arch, processor, ..] = tokens.as_slice() else {
            return None;
        };

        Some(Self {
            os: std::env::consts::OS.to_string(),
            kernel: kernel.clone(),
            kernel_version: kernel_version.clone(),
            arch: arch.clone(),
            processor: processor.clone(),
        })
    }
}

/// The command run to gather [`SysInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    program: &'static str,
    args: &'static [&'static str],
}

impl Probe {
    /// Kernel name, kernel release, machine, processor.
    pub const UNAME: Self = Self::new("uname", &["-srmp"]);

    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    /// Run the probe, returning `None` on failure.
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    pub async fn load(self, ctx: &CollectionContext) -> Option<SysInfo> {
        match ctx.run(self.program, self.args).await {
            Ok(output) => {
                let info = SysInfo::from_uname(&output.stdout);
                if info.is_none() {
                    log::debug!(target: LOG_TARGET, "Unexpected {} output: '{}'", self.program, String::from_utf8_lossy(&output.stdout).trim());
                }
                info
            }
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Could not probe system info: {e:#}");
                None
            }
        }
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    #[expect(clippy::unused_async, reason = "mirrors the signature of the supported-platform probe")]
    pub async fn load(self, _ctx: &CollectionContext) -> Option<SysInfo> {
        log::debug!(target: LOG_TARGET, "No system info probe for '{}'", std::env::consts::OS);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_uname_linux() {
        let info = SysInfo::from_uname(b"Linux 5.15.0-91-generic x86_64 x86_64\n").unwrap();
        assert_eq!(info.kernel, "Linux");
        assert_eq!(info.kernel_version, "5.15.0-91-generic");
        assert_eq!(info.arch, "x86_64");
        assert_eq!(info.processor, "x86_64");
        assert_eq!(info.os, std::env::consts::OS);
    }

    #[test]
    fn test_from_uname_darwin() {
        let info = SysInfo::from_uname(b"Darwin 23.1.0 arm64 arm\n").unwrap();
        assert_eq!(info.kernel, "Darwin");
        assert_eq!(info.arch, "arm64");
        assert_eq!(info.processor, "arm");
    }

    #[test]
    fn test_from_uname_too_few_tokens() {
        assert!(SysInfo::from_uname(b"Linux 5.15.0\n").is_none());
        assert!(SysInfo::from_uname(b"").is_none());
    }

    #[tokio::test]
    async fn test_load_missing_program() {
        let ctx = CollectionContext::new();
        assert!(Probe::new("envsnap-no-such-uname", &[]).load(&ctx).await.is_none());
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_load_on_linux() {
        let ctx = CollectionContext::new();
        let info = Probe::UNAME.load(&ctx).await.unwrap();
        assert_eq!(info.kernel, "Linux");
        assert_eq!(info.os, "linux");
        assert!(!info.arch.is_empty());
    }
}
