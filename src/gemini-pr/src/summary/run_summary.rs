//! Run summary types.

use crate::pull_requests::PrStatus;

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Working branch created for the run.
    pub branch_name: String,

    /// Commit message, which is also the PR title.
    pub commit_message: String,

    /// Whether the branch reached the remote.
    pub pushed: bool,

    /// Outcome of the pull request call, if it was made.
    pub pull_request: Option<PrStatus>,
}

impl RunSummary {
    /// Creates a summary for a run that has not done anything yet.
    #[must_use]
    pub fn new(dry_run: bool, branch_name: String, commit_message: String) -> Self {
        Self {
            dry_run,
            branch_name,
            commit_message,
            pushed: false,
            pull_request: None,
        }
    }

    /// Returns the PR URL if one was created.
    #[must_use]
    pub fn pr_url(&self) -> Option<&str> {
        self.pull_request.as_ref().and_then(PrStatus::url)
    }

    /// Returns true if the branch is on the remote but has no PR.
    ///
    /// No rollback happens in this state; the PR is left to be opened by hand.
    #[must_use]
    pub fn pushed_without_pr(&self) -> bool {
        self.pushed && self.pr_url().is_none()
    }
}
