//! Workflow run context
//!
//! Resolves which pull request the action runs against from the variables
//! the GitHub runner sets: `GITHUB_REPOSITORY`, `GITHUB_EVENT_PATH` and
//! `GITHUB_API_URL`.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Errors that can occur while resolving the run context
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("GITHUB_REPOSITORY is not set; pass --repo owner/name")]
    MissingRepository,

    #[error("Invalid repository '{0}', expected 'owner/name'")]
    InvalidRepository(String),

    #[error("GITHUB_EVENT_PATH is not set; pass --pr <number>")]
    MissingEventPath,

    #[error("Failed to read event payload {path}: {source}")]
    ReadEvent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse event payload: {0}")]
    ParseEvent(#[from] serde_json::Error),

    #[error("Event payload has no pull request number (is the workflow triggered by pull_request?)")]
    MissingPullNumber,
}

/// Identifies one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl PullRequestRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            number,
        }
    }
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Subset of the webhook payload we care about
#[derive(Debug, Deserialize)]
struct EventPayload {
    number: Option<u64>,
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: Option<u64>,
}

/// Split `owner/name` into its parts
pub fn parse_repository(value: &str) -> Result<(String, String), ContextError> {
    match value.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(ContextError::InvalidRepository(value.to_string())),
    }
}

/// Read the pull request number from a webhook event payload file
pub fn pull_number_from_event(path: &Path) -> Result<u64, ContextError> {
    let content = std::fs::read_to_string(path).map_err(|source| ContextError::ReadEvent {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: EventPayload = serde_json::from_str(&content)?;

    payload
        .number
        .or_else(|| payload.pull_request.and_then(|pr| pr.number))
        .ok_or(ContextError::MissingPullNumber)
}

/// Resolve the pull request from explicit overrides, falling back to the
/// runner environment
pub fn resolve_pull_request(
    repository: Option<&str>,
    number: Option<u64>,
) -> Result<PullRequestRef, ContextError> {
    let repository = match repository {
        Some(repo) => repo.to_string(),
        None => std::env::var("GITHUB_REPOSITORY").map_err(|_| ContextError::MissingRepository)?,
    };
    let (owner, repo) = parse_repository(&repository)?;

    let number = match number {
        Some(number) => number,
        None => {
            let event_path = std::env::var_os("GITHUB_EVENT_PATH").ok_or(ContextError::MissingEventPath)?;
            pull_number_from_event(Path::new(&event_path))?
        }
    };

    Ok(PullRequestRef::new(owner, repo, number))
}

/// REST API base URL (`GITHUB_API_URL` on GitHub Enterprise)
pub fn api_url() -> String {
    std::env::var("GITHUB_API_URL")
        .ok()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
