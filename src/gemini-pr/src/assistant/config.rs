//! Assistant command configuration.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Overrides the assistant command line, e.g. `claude -p`.
pub(crate) const COMMAND_ENV: &str = "GEMINI_PR_ASSISTANT";

/// Executable run when nothing else is configured.
pub const DEFAULT_COMMAND: &str = "gemini";

/// Unattended, auto-approving mode of the default assistant.
pub const DEFAULT_ARGS: &[&str] = &["--yolo"];

/// Top-level structure of the optional config file.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    assistant: AssistantSection,
}

/// `[assistant]` section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct AssistantSection {
    /// Executable name or path.
    command: Option<String>,
    /// Arguments passed before the instruction is written to stdin.
    args: Option<Vec<String>>,
    /// Kill the assistant after this many seconds.
    timeout_secs: Option<u64>,
}

/// How to launch the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    command: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_COMMAND,
            DEFAULT_ARGS.iter().map(|arg| (*arg).to_string()).collect(),
        )
    }
}

impl AssistantConfig {
    /// Creates a config for an arbitrary command with no timeout.
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            timeout: None,
        }
    }

    /// Sets or clears the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolves the assistant config from file, environment and defaults.
    ///
    /// A missing file is not an error. The `GEMINI_PR_ASSISTANT` variable
    /// takes precedence over the file; its first word is the command and any
    /// further words replace the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let section = load_section(path)?;
        let mut config = Self::default();

        if let Some(command) = section.command {
            config.command = command;
        }
        if let Some(args) = section.args {
            config.args = args;
        }
        config.timeout = section.timeout_secs.map(Duration::from_secs);

        if let Ok(value) = std::env::var(COMMAND_ENV) {
            let mut words = value.split_whitespace();
            if let Some(command) = words.next() {
                config.command = command.to_string();
                let args: Vec<String> = words.map(str::to_string).collect();
                if !args.is_empty() {
                    config.args = args;
                }
            }
        }

        Ok(config)
    }

    /// Executable name or path.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Arguments passed to the executable.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Optional wall-clock limit.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn load_section(path: &Path) -> Result<AssistantSection, ConfigError> {
    if !path.exists() {
        return Ok(AssistantSection::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parsed.assistant)
}
