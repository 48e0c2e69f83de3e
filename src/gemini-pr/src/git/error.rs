//! Git error types.

use super::GitStep;
use thiserror::Error;

/// Errors that can occur while driving git.
#[derive(Debug, Error)]
pub enum GitError {
    /// git could not be started.
    #[error("Failed to execute git for step '{step}': {source}")]
    Spawn {
        step: GitStep,
        #[source]
        source: std::io::Error,
    },

    /// git ran and reported failure.
    #[error("git {step} failed with status {}: {}", status_description(*.code), .stderr.trim())]
    Failed {
        step: GitStep,
        code: Option<i32>,
        stderr: String,
    },

    /// The assistant left the working tree unchanged.
    #[error("No changes to commit; the assistant did not modify any files")]
    NothingToCommit,
}

impl GitError {
    /// The step that failed, when one applies.
    pub fn step(&self) -> Option<GitStep> {
        match self {
            Self::Spawn { step, .. } | Self::Failed { step, .. } => Some(*step),
            Self::NothingToCommit => Some(GitStep::Commit),
        }
    }
}

fn status_description(code: Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}
