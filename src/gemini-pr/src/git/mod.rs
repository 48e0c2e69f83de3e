//! Branch, commit and push against the local checkout.
//!
//! Every operation shells out to `git` in the working directory. A failing
//! step aborts the run; nothing is rolled back, so a branch created before
//! the failure stays behind.

mod branch;
mod error;
mod step;

pub use branch::{generate_branch_name, BRANCH_PREFIX};
pub use error::GitError;
pub use step::GitStep;

use crate::config::Credential;
use crate::repository::{RepositoryUrl, TOKEN_USERNAME};
use std::path::Path;
use std::process::{Output, Stdio};
use std::str::FromStr;
use tokio::process::Command;
use tracing::{debug, info};

/// Environment variable carrying the token to the credential helper.
const TOKEN_ENV: &str = "GEMINI_PR_PUSH_TOKEN";

/// How the push authenticates against the remote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PushAuth {
    /// Hand the token to git through an inline credential helper that reads
    /// it from the child's environment.
    #[default]
    CredentialHelper,
    /// Embed the token in the remote URL as `oauth2:<token>@host`.
    ///
    /// The token shows up in the process list for the duration of the push.
    Url,
}

impl PushAuth {
    /// Returns the mode as it is spelled on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CredentialHelper => "credential-helper",
            Self::Url => "url",
        }
    }
}

impl FromStr for PushAuth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credential-helper" => Ok(Self::CredentialHelper),
            "url" => Ok(Self::Url),
            other => Err(format!(
                "unknown push auth mode '{other}' (expected 'credential-helper' or 'url')"
            )),
        }
    }
}

impl std::fmt::Display for PushAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creates and checks out a new branch.
pub async fn create_branch(workdir: &Path, branch_name: &str) -> Result<(), GitError> {
    info!(branch = %branch_name, "Creating and switching to new branch");
    run_git(workdir, GitStep::CreateBranch, &["checkout", "-b", branch_name], &[]).await?;
    Ok(())
}

/// Stages every change in the working tree, deletions included.
pub async fn stage_all(workdir: &Path) -> Result<(), GitError> {
    info!("Staging changes");
    run_git(workdir, GitStep::Stage, &["add", "-A"], &[]).await?;
    Ok(())
}

/// Checks if the working tree or index differs from HEAD.
pub async fn has_changes(workdir: &Path) -> Result<bool, GitError> {
    let output = run_git(workdir, GitStep::Status, &["status", "--porcelain"], &[]).await?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(!stdout.trim().is_empty())
}

/// Commits the index with `message`.
///
/// # Errors
///
/// Returns [`GitError::NothingToCommit`] when nothing is staged.
pub async fn commit(workdir: &Path, message: &str) -> Result<(), GitError> {
    if !has_changes(workdir).await? {
        return Err(GitError::NothingToCommit);
    }
    info!("Committing changes");
    run_git(workdir, GitStep::Commit, &["commit", "-m", message], &[]).await?;
    Ok(())
}

/// Pushes `branch_name` to the repository under the same ref name.
pub async fn push(
    workdir: &Path,
    repository: &RepositoryUrl,
    credential: &Credential,
    branch_name: &str,
    auth: PushAuth,
) -> Result<(), GitError> {
    info!(
        branch = %branch_name,
        remote = %repository.push_url(),
        auth = %auth,
        "Pushing branch"
    );

    let invocation = PushInvocation::new(repository, credential, branch_name, auth);
    let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
    let envs: Vec<(&str, &str)> = invocation
        .envs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    run_git(workdir, GitStep::Push, &args, &envs)
        .await
        .map_err(|e| redact_error(e, credential.expose()))?;
    Ok(())
}

/// Arguments and extra environment of a `git push`.
#[derive(Debug)]
struct PushInvocation {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl PushInvocation {
    fn new(
        repository: &RepositoryUrl,
        credential: &Credential,
        branch_name: &str,
        auth: PushAuth,
    ) -> Self {
        match auth {
            PushAuth::CredentialHelper => {
                let helper = format!(
                    "credential.helper=!f() {{ test \"$1\" = get || exit 0; \
                     echo username={TOKEN_USERNAME}; echo \"password=${TOKEN_ENV}\"; }}; f"
                );
                Self {
                    args: vec![
                        "-c".to_string(),
                        // Empty value clears helpers inherited from user config.
                        "credential.helper=".to_string(),
                        "-c".to_string(),
                        helper,
                        "push".to_string(),
                        repository.push_url(),
                        branch_name.to_string(),
                    ],
                    envs: vec![(TOKEN_ENV.to_string(), credential.expose().to_string())],
                }
            }
            PushAuth::Url => {
                let remote = match repository.push_remote() {
                    Some(remote) => remote.to_string(),
                    None => repository.authenticated_push_url(credential),
                };
                Self {
                    args: vec!["push".to_string(), remote, branch_name.to_string()],
                    envs: Vec::new(),
                }
            }
        }
    }
}

fn redact_error(error: GitError, token: &str) -> GitError {
    match error {
        GitError::Failed { step, code, stderr } => GitError::Failed {
            step,
            code,
            stderr: stderr.replace(token, "***"),
        },
        other => other,
    }
}

/// Runs a git command in `workdir`.
async fn run_git(
    workdir: &Path,
    step: GitStep,
    args: &[&str],
    envs: &[(&str, &str)],
) -> Result<Output, GitError> {
    debug!(step = %step, "Running git");

    let output = Command::new("git")
        .args(args)
        .envs(envs.iter().copied())
        .env("GIT_TERMINAL_PROMPT", "0")
        .current_dir(workdir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| GitError::Spawn { step, source })?;

    if !output.status.success() {
        return Err(GitError::Failed {
            step,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(output)
}
