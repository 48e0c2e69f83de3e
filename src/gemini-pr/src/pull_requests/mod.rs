//! Pull request creation.
//!
//! One `POST /repos/{owner}/{repo}/pulls` after the branch is pushed. A
//! rejected request is reported, not raised: the branch is already on the
//! remote and the PR can still be opened by hand.

mod error;
mod request;
mod status;

pub use error::PrError;
pub use request::NewPullRequest;
pub use status::PrStatus;

use crate::config::Credential;
use crate::repository::RepositoryUrl;
use http::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{info, info_span, warn, Instrument};

/// Media type of the v3 REST API.
pub const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";

/// Fields read back from a created pull request.
#[derive(Debug, Deserialize)]
struct CreatedPullRequest {
    number: u64,
    html_url: String,
}

/// GitHub client scoped to one repository's API host.
pub struct PullRequestClient {
    octocrab: Octocrab,
}

impl PullRequestClient {
    /// Builds a client for `repository` authorized by `credential`.
    ///
    /// Sends `Authorization: token <credential>` and the v3 `Accept` header
    /// on every request.
    ///
    /// # Errors
    ///
    /// Returns [`PrError`] if the API base or credential cannot form a valid
    /// request.
    pub fn new(repository: &RepositoryUrl, credential: &Credential) -> Result<Self, PrError> {
        let authorization = format!("token {}", credential.expose());
        HeaderValue::from_str(&authorization)?;

        let octocrab = Octocrab::builder()
            .base_uri(repository.api_base())?
            .add_header(AUTHORIZATION, authorization)
            .add_header(ACCEPT, GITHUB_V3_ACCEPT.to_string())
            .build()?;
        Ok(Self { octocrab })
    }

    /// Opens a pull request.
    ///
    /// Returns [`PrStatus::Created`] on `201 Created` and
    /// [`PrStatus::Rejected`] for any other status.
    ///
    /// # Errors
    ///
    /// Returns [`PrError`] if the request cannot be sent or a `201` body
    /// lacks the PR URL.
    pub async fn create(
        &self,
        repository: &RepositoryUrl,
        request: &NewPullRequest,
    ) -> Result<PrStatus, PrError> {
        let span = info_span!(
            "create_pr",
            repo = %repository.full_name(),
            head = %request.head,
            base = %request.base
        );

        async {
            info!("Creating pull request");

            let response = self
                .octocrab
                ._post(repository.pulls_route(), Some(request))
                .await?;
            let status = response.status().as_u16();
            let body = self.octocrab.body_to_string(response).await?;

            if status != 201 {
                warn!(status, "Pull request creation failed");
                return Ok(PrStatus::Rejected { status, body });
            }

            let created: CreatedPullRequest = serde_json::from_str(&body)?;
            info!(pr_number = created.number, "Pull request created successfully");
            Ok(PrStatus::Created {
                number: created.number,
                url: created.html_url,
            })
        }
        .instrument(span)
        .await
    }
}
