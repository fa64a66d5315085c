use crate::Error;
use core::fmt::{Display, Formatter};
use url::Url;

const HOST: &str = "github.com";
const RAW_CONTENT_BASE: &str = "https://raw.githubusercontent.com";

/// A reference to a configuration file hosted in a GitHub repository.
///
/// Written as `github.com/<owner>/<repo>[@<ref>]`, where `<ref>` is a branch, tag, or commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: Box<str>,
    repo: Box<str>,
    reference: Option<Box<str>>,
}

impl RepoRef {
    /// Whether `path` uses the remote reference syntax rather than naming a local file.
    #[must_use]
    pub fn is_remote(path: &str) -> bool {
        path.starts_with("github.com/")
    }

    pub fn parse(spec: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidRemoteRef(spec.to_string());

        let (location, reference) = match spec.split_once('@') {
            Some((location, reference)) => (location, Some(reference)),
            None => (spec, None),
        };

        let segments: Vec<&str> = location.split('/').collect();
        let [host, owner, repo] = segments.as_slice() else {
            return Err(invalid());
        };

        if *host != HOST || owner.is_empty() || repo.is_empty() || reference.is_some_and(str::is_empty) {
            return Err(invalid());
        }

        Ok(Self {
            owner: Box::from(*owner),
            repo: Box::from(*repo),
            reference: reference.map(Box::from),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// The raw-content URL of `file` at this reference, defaulting to the repository's `HEAD`.
    pub fn raw_url(&self, file: &str) -> Result<Url, Error> {
        let reference = self.reference().unwrap_or("HEAD");
        Url::parse(&format!("{RAW_CONTENT_BASE}/{}/{}/{reference}/{file}", self.owner, self.repo))
            .map_err(|_err| Error::InvalidRemoteRef(self.to_string()))
    }
}

impl Display for RepoRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{HOST}/{}/{}", self.owner, self.repo)?;
        if let Some(reference) = &self.reference {
            write!(f, "@{reference}")?;
        }
        Ok(())
    }
}
