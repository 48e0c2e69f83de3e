//! Pull request status types.

/// Outcome of a pull request creation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrStatus {
    /// PR successfully created.
    Created {
        /// GitHub PR number.
        number: u64,
        /// GitHub PR URL.
        url: String,
    },

    /// The service answered with anything but `201 Created`.
    ///
    /// The branch stays pushed; the PR can be opened by hand.
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl PrStatus {
    /// Returns the status as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Rejected { .. } => "rejected",
        }
    }

    /// Returns the PR URL if created.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Created { url, .. } => Some(url),
            Self::Rejected { .. } => None,
        }
    }
}
