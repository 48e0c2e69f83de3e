#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod assistant;
pub mod config;
pub mod git;
pub mod pull_requests;
pub mod repository;
pub mod runner;
pub mod summary;

pub use assistant::{run_assistant, AssistantConfig, AssistantError};
pub use config::{
    validate_base_branch, ConfigError, Credential, DEFAULT_BASE_BRANCH, DEFAULT_PR_BODY,
    DEFAULT_REPOSITORY,
};
pub use git::{
    commit, create_branch, generate_branch_name, has_changes, push, stage_all, GitError, GitStep,
    PushAuth, BRANCH_PREFIX,
};
pub use pull_requests::{NewPullRequest, PrError, PrStatus, PullRequestClient};
pub use repository::{RepositoryError, RepositoryUrl};
pub use runner::{Runner, RunnerConfig, RunnerError, RunnerOptions, DEFAULT_CONFIG_FILE};
pub use summary::RunSummary;
