//! Invocation validation.
//!
//! Everything here runs before the first git command so that a bad
//! invocation never leaves a branch or commit behind.

mod credential;
mod error;

pub use credential::Credential;
pub use error::ConfigError;

use bstr::ByteSlice;

/// Base branch used when none is given.
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Body used for pull requests when none is given.
pub const DEFAULT_PR_BODY: &str = "PR created by Gemini CLI automation script.";

/// Repository targeted when none is given.
pub const DEFAULT_REPOSITORY: &str = "https://github.com/SarthakAjmera26/buildpacks-ajmerasarthak";

/// Checks that `branch` is usable as the base of a pull request.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseBranch`] if git would reject the name.
pub fn validate_base_branch(branch: &str) -> Result<(), ConfigError> {
    gix_validate::reference::name_partial(branch.as_bytes().as_bstr())
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidBaseBranch {
            branch: branch.to_string(),
            message: e.to_string(),
        })
}

/// Checks that the assistant has something to do.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyInstruction`] for blank instructions.
pub fn validate_instruction(instruction: &str) -> Result<(), ConfigError> {
    if instruction.trim().is_empty() {
        return Err(ConfigError::EmptyInstruction);
    }
    Ok(())
}
