use crate::github::context::PullRequestRef;
use crate::Result;
use async_trait::async_trait;

/// A pull request as seen by the action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub reference: PullRequestRef,

    /// Description body, empty when the pull request has none
    pub body: String,
}

/// Where pull-request bodies are read from and written back to
///
/// Implemented by [`crate::github::GitHubClient`] for the REST API; tests
/// provide in-memory stores.
#[async_trait]
pub trait PullRequestStore: Send + Sync {
    /// Fetch the current body of a pull request
    async fn fetch(&self, reference: &PullRequestRef) -> Result<PullRequest>;

    /// Replace the body of a pull request
    async fn update_body(&self, reference: &PullRequestRef, body: &str) -> Result<()>;
}
