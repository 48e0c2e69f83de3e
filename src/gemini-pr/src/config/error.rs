//! Configuration error types.

use thiserror::Error;

/// Errors raised while validating the invocation before any mutating step.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No credential was supplied.
    #[error("GITHUB_TOKEN environment variable not set; set it to a token with 'repo' scope")]
    MissingCredential,

    /// The instruction for the assistant is empty.
    #[error("The instruction passed to the assistant must not be empty")]
    EmptyInstruction,

    /// The base branch is not a valid git ref name.
    #[error("Invalid base branch '{branch}': {message}")]
    InvalidBaseBranch { branch: String, message: String },

    /// Failed to read a config file.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a config file.
    #[error("Failed to parse config '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
