//! Orchestrates one assistant-to-pull-request run.

mod config;
mod error;

pub use config::{RunnerConfig, RunnerOptions, DEFAULT_CONFIG_FILE};
pub use error::RunnerError;

use crate::assistant::run_assistant;
use crate::git::{self, generate_branch_name};
use crate::pull_requests::{NewPullRequest, PrStatus, PullRequestClient};
use crate::summary::RunSummary;
use tracing::{error, info, info_span, warn, Instrument};

/// Runs the assistant and turns its edits into a pull request.
pub struct Runner {
    config: RunnerConfig,
    client: PullRequestClient,
}

impl Runner {
    /// Builds a runner from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::PullRequest`] if the API client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = PullRequestClient::new(config.repository(), config.credential())?;
        Ok(Self { config, client })
    }

    /// Executes the full flow: branch, assistant, stage, commit, push, PR.
    ///
    /// Steps run strictly in order and the first failure aborts the run.
    /// Nothing is rolled back. A rejected pull request is not a failure; it
    /// is returned in the summary with the branch marked as pushed.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let config = &self.config;
        let span = info_span!("run", repo = %config.repository().full_name());

        async {
            let branch_name = generate_branch_name();
            let mut summary = RunSummary::new(
                config.dry_run(),
                branch_name.clone(),
                config.title().to_string(),
            );

            if config.dry_run() {
                print_dry_run_preview(config, &branch_name);
                return Ok(summary);
            }

            let workdir = config.workdir();
            git::create_branch(workdir, &branch_name).await?;
            run_assistant(workdir, config.assistant(), config.instruction()).await?;
            git::stage_all(workdir).await?;
            git::commit(workdir, config.title()).await?;
            git::push(
                workdir,
                config.repository(),
                config.credential(),
                &branch_name,
                config.push_auth(),
            )
            .await?;
            summary.pushed = true;

            let request = NewPullRequest {
                title: config.title().to_string(),
                body: config.body().to_string(),
                head: branch_name.clone(),
                base: config.base_branch().to_string(),
            };
            let status = match self.client.create(config.repository(), &request).await {
                Ok(status) => status,
                Err(e) => {
                    error!(
                        branch = %branch_name,
                        error = %e,
                        "Branch was pushed but the pull request could not be created"
                    );
                    return Err(e.into());
                }
            };

            if let PrStatus::Rejected { status, .. } = &status {
                warn!(
                    branch = %branch_name,
                    status,
                    "Branch was pushed without a pull request; open it by hand"
                );
            } else {
                info!(branch = %branch_name, "Run complete");
            }
            summary.pull_request = Some(status);

            Ok(summary)
        }
        .instrument(span)
        .await
    }
}

fn print_dry_run_preview(config: &RunnerConfig, branch_name: &str) {
    let repository = config.repository();
    let assistant = config.assistant();

    println!("\n[DRY RUN] Repository: {repository}");
    println!(
        "  Would run: {} {}",
        assistant.command(),
        assistant.args().join(" ")
    );
    println!("  Would create branch: {branch_name}");
    println!("  Would commit with message: \"{}\"", config.title());
    println!(
        "  Would push to: {} ({})",
        repository.push_url(),
        config.push_auth()
    );
    println!("  Would open PR at: {}", repository.pulls_api_url());
    println!("    title: {}", config.title());
    println!("    base: {}", config.base_branch());
    println!("    body: {}", config.body());
    println!();
}
