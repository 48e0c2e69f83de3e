//! Runner configuration.

use crate::assistant::AssistantConfig;
use crate::config::{
    validate_base_branch, validate_instruction, Credential, DEFAULT_BASE_BRANCH, DEFAULT_PR_BODY,
    DEFAULT_REPOSITORY,
};
use crate::git::PushAuth;
use crate::repository::RepositoryUrl;
use crate::runner::RunnerError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when present.
pub const DEFAULT_CONFIG_FILE: &str = "gemini-pr.toml";

/// Raw invocation inputs, before validation.
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// Instruction handed to the assistant.
    pub instruction: String,
    /// Repository web URL.
    pub repository: String,
    /// Bearer token, usually from `GITHUB_TOKEN`.
    pub token: Option<String>,
    /// Branch the PR targets.
    pub base_branch: String,
    /// PR title and commit message; the instruction when unset.
    pub title: Option<String>,
    /// PR body.
    pub body: Option<String>,
    /// Checkout the assistant and git run in.
    pub workdir: PathBuf,
    /// Optional TOML file with an `[assistant]` section.
    pub config_path: PathBuf,
    /// Push authentication mode.
    pub push_auth: PushAuth,
    /// REST API base replacing `https://api.<host>`.
    pub api_url: Option<String>,
    /// Git remote replacing the one derived from `repository`.
    pub push_url: Option<String>,
    /// Assistant timeout, overriding the config file.
    pub assistant_timeout: Option<Duration>,
    /// Validate and preview without touching anything.
    pub dry_run: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            instruction: String::new(),
            repository: DEFAULT_REPOSITORY.to_string(),
            token: None,
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            title: None,
            body: None,
            workdir: PathBuf::from("."),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            push_auth: PushAuth::default(),
            api_url: None,
            push_url: None,
            assistant_timeout: None,
            dry_run: false,
        }
    }
}

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    instruction: String,
    repository: RepositoryUrl,
    credential: Credential,
    base_branch: String,
    title: String,
    body: String,
    workdir: PathBuf,
    assistant: AssistantConfig,
    push_auth: PushAuth,
    dry_run: bool,
}

impl RunnerConfig {
    /// Validates the invocation.
    ///
    /// The credential is checked first; nothing here touches the checkout.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] or [`RunnerError::Repository`] for an
    /// unusable invocation.
    pub fn new(options: RunnerOptions) -> Result<Self, RunnerError> {
        let credential = Credential::new(options.token)?;
        validate_instruction(&options.instruction)?;
        validate_base_branch(&options.base_branch)?;

        let mut repository = RepositoryUrl::parse(&options.repository)?;
        if let Some(api_url) = options.api_url.as_deref() {
            repository = repository.with_api_base(api_url)?;
        }
        if let Some(push_url) = options.push_url {
            repository = repository.with_push_remote(push_url);
        }

        let mut assistant = AssistantConfig::load(&options.config_path)?;
        if options.assistant_timeout.is_some() {
            assistant = assistant.with_timeout(options.assistant_timeout);
        }

        let title = match options.title {
            Some(title) if !title.is_empty() => title,
            _ => options.instruction.clone(),
        };

        Ok(Self {
            instruction: options.instruction,
            repository,
            credential,
            base_branch: options.base_branch,
            title,
            body: options.body.unwrap_or_else(|| DEFAULT_PR_BODY.to_string()),
            workdir: options.workdir,
            assistant,
            push_auth: options.push_auth,
            dry_run: options.dry_run,
        })
    }

    /// Replaces the assistant configuration.
    #[must_use]
    pub fn with_assistant(mut self, assistant: AssistantConfig) -> Self {
        self.assistant = assistant;
        self
    }

    /// Returns the instruction for the assistant.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Returns the target repository.
    pub fn repository(&self) -> &RepositoryUrl {
        &self.repository
    }

    /// Returns the credential.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the PR base branch.
    pub fn base_branch(&self) -> &str {
        &self.base_branch
    }

    /// Returns the PR title, also used as the commit message.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the PR body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the working directory.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Returns the assistant configuration.
    pub fn assistant(&self) -> &AssistantConfig {
        &self.assistant
    }

    /// Returns the push authentication mode.
    pub fn push_auth(&self) -> PushAuth {
        self.push_auth
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
