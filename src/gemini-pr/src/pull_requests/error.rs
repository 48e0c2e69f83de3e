//! Pull request error types.

use thiserror::Error;

/// Errors that prevent a pull request call from producing an answer.
///
/// A response with a non-success status is not an error; it becomes
/// [`super::PrStatus::Rejected`].
#[derive(Debug, Error)]
pub enum PrError {
    /// GitHub API or transport error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// A header value could not be built from the credential.
    #[error("Invalid authorization header: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// The service accepted the request but returned an unreadable body.
    #[error("Unexpected pull request response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
