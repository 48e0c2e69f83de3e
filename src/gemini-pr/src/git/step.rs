//! The git operations a run performs, in order.

/// One git operation of the branch/commit/push sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    /// `git checkout -b`.
    CreateBranch,
    /// `git add -A`.
    Stage,
    /// `git status --porcelain`.
    Status,
    /// `git commit`.
    Commit,
    /// `git push`.
    Push,
}

impl GitStep {
    /// Returns the step as a short human readable string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateBranch => "checkout -b",
            Self::Stage => "add",
            Self::Status => "status",
            Self::Commit => "commit",
            Self::Push => "push",
        }
    }
}

impl std::fmt::Display for GitStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
