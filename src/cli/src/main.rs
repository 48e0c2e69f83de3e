//! CLI for gemini-pr.
//!
//! Runs an AI assistant on the current checkout, commits its changes to a new
//! branch, pushes it and opens a pull request.

use clap::Parser;
use gemini_pr::{
    PrStatus, PushAuth, RunSummary, Runner, RunnerConfig, RunnerError, RunnerOptions,
    DEFAULT_BASE_BRANCH, DEFAULT_CONFIG_FILE, DEFAULT_REPOSITORY,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Run an AI assistant and open a GitHub pull request with its changes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The instruction to pass to the assistant.
    prompt: String,

    /// The GitHub repository URL.
    #[arg(long, default_value = DEFAULT_REPOSITORY)]
    repo: String,

    /// The base branch for the pull request.
    #[arg(long, default_value = DEFAULT_BASE_BRANCH)]
    branch: String,

    /// The title of the pull request. Defaults to the prompt.
    #[arg(long)]
    title: Option<String>,

    /// The body of the pull request.
    #[arg(long)]
    body: Option<String>,

    /// GitHub Personal Access Token with 'repo' scope.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Checkout to run the assistant and git in.
    #[arg(long, default_value = ".")]
    workdir: PathBuf,

    /// Path to an optional config file with an [assistant] section.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// How the push authenticates: 'credential-helper' or 'url'.
    #[arg(long, default_value_t = PushAuth::default())]
    push_auth: PushAuth,

    /// Push to this remote instead of the one derived from --repo.
    #[arg(long)]
    push_url: Option<String>,

    /// REST API base URL, e.g. for GitHub Enterprise.
    #[arg(long)]
    api_url: Option<String>,

    /// Kill the assistant after this many seconds.
    #[arg(long)]
    assistant_timeout_secs: Option<u64>,

    /// Preview the run without creating branches, commits or PRs.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout only carries the run's result.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let options = RunnerOptions {
        instruction: args.prompt,
        repository: args.repo,
        token: args.token,
        base_branch: args.branch,
        title: args.title,
        body: args.body,
        workdir: args.workdir,
        config_path: args.config,
        push_auth: args.push_auth,
        api_url: args.api_url,
        push_url: args.push_url,
        assistant_timeout: args.assistant_timeout_secs.map(Duration::from_secs),
        dry_run: args.dry_run,
    };
    let config = RunnerConfig::new(options)?;

    // Octocrab's TLS stack needs a process-wide provider.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the outcome of the run.
fn print_summary(summary: &RunSummary) {
    if summary.pushed_without_pr() {
        if let Some(PrStatus::Rejected { status, body }) = &summary.pull_request {
            println!("Error creating Pull Request: {status}");
            println!("{body}");
        }
        println!(
            "Branch '{}' was pushed; open the pull request manually.",
            summary.branch_name
        );
    } else if let Some(url) = summary.pr_url() {
        println!("{url}");
    } else if summary.dry_run {
        println!("Dry run complete for branch '{}'.", summary.branch_name);
    }
}
