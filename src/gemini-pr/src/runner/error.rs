//! Runner error types.

use crate::assistant::AssistantError;
use crate::git::GitError;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid invocation or config file.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Unusable repository URL.
    #[error(transparent)]
    Repository(#[from] crate::repository::RepositoryError),

    /// The assistant was missing, failed or timed out.
    #[error(transparent)]
    Assistant(#[from] AssistantError),

    /// A git step failed.
    #[error(transparent)]
    Git(#[from] GitError),

    /// The pull request call could not be made.
    #[error(transparent)]
    PullRequest(#[from] crate::pull_requests::PrError),
}

impl RunnerError {
    /// Process exit code for this error.
    ///
    /// Failed tools pass their own status through; everything else is `1`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        let tool_code = match self {
            Self::Assistant(AssistantError::Failed { code, .. }) => *code,
            Self::Git(GitError::Failed { code, .. }) => *code,
            _ => None,
        };
        tool_code
            .and_then(|code| u8::try_from(code).ok())
            .filter(|code| *code != 0)
            .unwrap_or(1)
    }
}
