//! GitHub REST client
//!
//! Only the two pull-request endpoints the action needs:
//! - `GET /repos/{owner}/{repo}/pulls/{number}`
//! - `PATCH /repos/{owner}/{repo}/pulls/{number}` with `{"body": ...}`

use crate::github::context::PullRequestRef;
use crate::github::store::{PullRequest, PullRequestStore};
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

const API_VERSION: &str = "2022-11-28";

/// Errors returned by the GitHub client
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Invalid GitHub token: {0}")]
    InvalidToken(String),
}

#[derive(Debug, Deserialize)]
struct PullRequestResponse {
    body: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpdateBodyRequest<'a> {
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// Authenticated client for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    /// Create a client for `api_url` (e.g. `https://api.github.com`)
    pub fn new(token: &str, api_url: impl Into<String>) -> std::result::Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| GitHubError::InvalidToken(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("prswitch/", env!("CARGO_PKG_VERSION"))),
        );

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn pull_url(&self, reference: &PullRequestRef) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_url, reference.owner, reference.repo, reference.number
        )
    }

    /// Fetch a pull request
    pub async fn get_pull_request(
        &self,
        reference: &PullRequestRef,
    ) -> std::result::Result<PullRequest, GitHubError> {
        debug!("Fetching info on pull-request {}", reference);
        let response = self.http.get(self.pull_url(reference)).send().await?;
        let response = check_status(response).await?;
        let pull: PullRequestResponse = response.json().await?;
        debug!("Pull-request info fetched with success");

        Ok(PullRequest {
            reference: reference.clone(),
            body: pull.body.unwrap_or_default(),
        })
    }

    /// Replace the body of a pull request
    pub async fn update_pull_request_body(
        &self,
        reference: &PullRequestRef,
        body: &str,
    ) -> std::result::Result<(), GitHubError> {
        debug!("Updating body of pull-request {}", reference);
        let response = self
            .http
            .patch(self.pull_url(reference))
            .json(&UpdateBodyRequest { body })
            .send()
            .await?;
        check_status(response).await?;
        debug!("Pull-request body updated");
        Ok(())
    }
}

/// Turn a non-success response into [`GitHubError::Status`]
async fn check_status(response: reqwest::Response) -> std::result::Result<reqwest::Response, GitHubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or(text);

    Err(GitHubError::Status { status, message })
}

#[async_trait]
impl PullRequestStore for GitHubClient {
    async fn fetch(&self, reference: &PullRequestRef) -> Result<PullRequest> {
        Ok(self.get_pull_request(reference).await?)
    }

    async fn update_body(&self, reference: &PullRequestRef, body: &str) -> Result<()> {
        Ok(self.update_pull_request_body(reference, body).await?)
    }
}
