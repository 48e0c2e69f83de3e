//! Assistant error types.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while running the assistant.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The executable is not on the search path.
    #[error("'{command}' command not found; make sure it is installed and on your PATH")]
    NotFound { command: String },

    /// The process could not be started for another reason.
    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the instruction or waiting for exit failed.
    #[error("I/O error while running '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The assistant exited unsuccessfully.
    #[error("'{command}' exited with {}", exit_description(*.code))]
    Failed { command: String, code: Option<i32> },

    /// The assistant ran past the configured timeout and was killed.
    #[error("'{command}' timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },
}

fn exit_description(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
