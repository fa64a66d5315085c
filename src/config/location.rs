use super::RepoRef;
use crate::Error;
use camino::{Utf8Path, Utf8PathBuf};

const LOG_TARGET: &str = "    config";

/// The name of the configuration file envsnap reads and `init` writes.
pub const CONFIG_FILE: &str = ".envsnap";

/// Where a configuration document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    Local(Utf8PathBuf),
    Remote(RepoRef),
}

impl ConfigLocation {
    /// Resolve a user-supplied path.
    ///
    /// No path means `./.envsnap`, a directory means the `.envsnap` inside it, and a path
    /// starting with `github.com/` is a remote repository reference.
    pub fn resolve(path: Option<&str>) -> Result<Self, Error> {
        let Some(path) = path else {
            return Ok(Self::Local(Utf8Path::new(".").join(CONFIG_FILE)));
        };

        if RepoRef::is_remote(path) {
            return Ok(Self::Remote(RepoRef::parse(path)?));
        }

        let path = Utf8PathBuf::from(path);
        if path.is_dir() {
            Ok(Self::Local(path.join(CONFIG_FILE)))
        } else {
            Ok(Self::Local(path))
        }
    }

    /// Read the raw configuration text.
    pub async fn read(&self) -> Result<String, Error> {
        match self {
            Self::Local(path) => {
                log::info!(target: LOG_TARGET, "Loading configuration from '{path}'");
                if !path.exists() {
                    return Err(Error::NoConfig);
                }
                std::fs::read_to_string(path).map_err(|e| Error::io(path.clone(), e))
            }
            Self::Remote(repo) => fetch(repo).await,
        }
    }
}

async fn fetch(repo: &RepoRef) -> Result<String, Error> {
    let url = repo.raw_url(CONFIG_FILE)?;
    log::info!(target: LOG_TARGET, "Fetching configuration for '{repo}' from '{url}'");

    let fetch_err = |source| Error::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .user_agent(concat!("envsnap/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(fetch_err)?;

    let response = client.get(url.clone()).send().await.map_err(fetch_err)?;
    log::debug!(target: LOG_TARGET, "Remote configuration request returned HTTP {}", response.status());

    response.error_for_status().map_err(fetch_err)?.text().await.map_err(fetch_err)
}
