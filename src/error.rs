use camino::Utf8PathBuf;

/// Hard errors which abort the current operation.
///
/// Runtime collection failures never surface here; they are recorded as warnings in the
/// [`CollectionContext`](crate::facts::CollectionContext) instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error(".envsnap file already exists")]
    ConfigExists,

    #[error(".envsnap file not found")]
    NoConfig,

    #[error("unsupported language passed to the --lang flag: '{0}'")]
    UnsupportedLang(String),

    #[error("envsnap failed to render some configured options (run with --log-level debug for more detail)")]
    IncompleteRender,

    #[error("unsupported format string provided: '{0}'")]
    UnsupportedFormat(String),

    #[error("no version specified in config")]
    NoConfigVersion,

    #[error("invalid config version specified: {0}")]
    InvalidConfigVersion(i64),

    #[error("invalid remote reference '{0}': must be in the format 'github.com/<owner>/<repo>[@<ref>]'")]
    InvalidRemoteRef(String),

    #[error("unsupported option for {section}: {option}")]
    UnsupportedOption { section: &'static str, option: String },

    #[error("could not access '{path}'")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse configuration")]
    Parse(#[from] serde_yaml::Error),

    #[error("could not encode result as JSON")]
    Json(#[from] serde_json::Error),

    #[error("could not format result")]
    Format(#[from] core::fmt::Error),

    #[error("could not write output")]
    Output(#[source] std::io::Error),

    #[error("could not fetch remote configuration from '{url}'")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
