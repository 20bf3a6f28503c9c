//! GitHub integration: run context, REST client and the pull-request store seam

pub mod client;
pub mod context;
pub mod store;

pub use client::{GitHubClient, GitHubError};
pub use context::{resolve_pull_request, ContextError, PullRequestRef};
pub use store::{PullRequest, PullRequestStore};
