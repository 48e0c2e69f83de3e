//! Pull request creation payload.

use serde::Serialize;

/// JSON body of `POST /repos/{owner}/{repo}/pulls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPullRequest {
    /// PR title.
    pub title: String,

    /// PR description.
    pub body: String,

    /// Branch holding the changes.
    pub head: String,

    /// Branch the changes should be merged into.
    pub base: String,
}
