//! External AI assistant invocation.
//!
//! The assistant is trusted to edit files in the working directory. It gets
//! the instruction on stdin and runs unattended; its own output goes straight
//! to the terminal.

mod config;
mod error;

pub use config::{AssistantConfig, DEFAULT_ARGS, DEFAULT_COMMAND};
pub use error::AssistantError;

use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Runs the assistant in `workdir` and waits for it to exit.
///
/// # Errors
///
/// - [`AssistantError::NotFound`] if the executable is not on the PATH
/// - [`AssistantError::Failed`] if it exits with a non-zero status
/// - [`AssistantError::Timeout`] if a timeout is configured and exceeded
pub async fn run_assistant(
    workdir: &Path,
    config: &AssistantConfig,
    instruction: &str,
) -> Result<(), AssistantError> {
    let command = config.command().to_string();
    info!(command = %command, "Running assistant");

    let mut child = Command::new(&command)
        .args(config.args())
        .current_dir(workdir)
        .stdin(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => AssistantError::NotFound {
                command: command.clone(),
            },
            _ => AssistantError::Spawn {
                command: command.clone(),
                source,
            },
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // An assistant that exits without reading stdin is judged by its status.
        match stdin.write_all(instruction.as_bytes()).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("Assistant closed stdin before reading the instruction");
            }
            Err(source) => {
                return Err(AssistantError::Io {
                    command: command.clone(),
                    source,
                })
            }
        }
    }

    let status = match config.timeout() {
        Some(timeout) => {
            let waited = tokio::time::timeout(timeout, child.wait()).await;
            match waited {
                Ok(status) => status,
                Err(_) => {
                    warn!(?timeout, "Assistant timed out, killing it");
                    if let Err(e) = child.kill().await {
                        warn!(error = %e, "Failed to kill assistant");
                    }
                    return Err(AssistantError::Timeout { command, timeout });
                }
            }
        }
        None => child.wait().await,
    }
    .map_err(|source| AssistantError::Io {
        command: command.clone(),
        source,
    })?;

    if !status.success() {
        return Err(AssistantError::Failed {
            command,
            code: status.code(),
        });
    }

    info!("Assistant finished successfully");
    Ok(())
}
