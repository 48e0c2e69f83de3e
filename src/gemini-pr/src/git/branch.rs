//! Working branch naming.

/// Literal every working branch starts with.
pub const BRANCH_PREFIX: &str = "gemini-changes-";

/// Generates a fresh working branch name.
///
/// Format: `gemini-changes-{8 lowercase hex chars}`, from 4 random bytes.
#[must_use]
pub fn generate_branch_name() -> String {
    let suffix: [u8; 4] = rand::random();
    format!("{BRANCH_PREFIX}{}", hex::encode(suffix))
}
