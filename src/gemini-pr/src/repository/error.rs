//! Repository URL error types.

use thiserror::Error;

/// Errors that can occur while interpreting a repository URL.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The URL could not be parsed at all.
    #[error("Invalid repository URL '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Only http(s) remotes are supported.
    #[error("Unsupported scheme '{scheme}' in repository URL '{url}'")]
    UnsupportedScheme { url: String, scheme: String },

    /// The URL has no host component.
    #[error("Repository URL '{url}' has no host")]
    MissingHost { url: String },

    /// The path is not `<owner>/<name>`.
    #[error("Repository URL '{url}' must point at <owner>/<name>")]
    InvalidPath { url: String },
}
