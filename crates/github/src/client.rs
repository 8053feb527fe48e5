//! GitHub REST API client for single-PR activity lookups

use chrono::{DateTime, Utc};
use common::models::RepoRef;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub(crate) const GRAPHQL_URL: &str = "https://api.github.com/graphql";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("GraphQL error: {0}")]
    Graph(String),
}

/// GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    token: Option<String>,
}

/// PR as returned by the REST API
#[derive(Debug, Deserialize)]
pub struct GithubPr {
    pub number: i32,
    pub title: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
}

/// Review as returned by the REST API
#[derive(Debug, Deserialize)]
pub struct GithubReview {
    pub user: Option<GithubUser>,
    pub state: String,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// User as returned by the REST API
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
}

/// Issue comment as returned by the REST API (conversation comments, not
/// inline review comments)
#[derive(Debug, Deserialize)]
pub struct GithubComment {
    pub user: Option<GithubUser>,
    pub created_at: DateTime<Utc>,
}

/// Emoji reaction as returned by the REST API
#[derive(Debug, Deserialize)]
pub struct GithubReaction {
    pub user: Option<GithubUser>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        let client = reqwest::Client::new();
        Self { client, token }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("pr-rescue/0.1"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(ref token) = self.token {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, val);
            }
        }
        headers
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(resp.url().to_string()));
        }
        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(ClientError::RateLimited { retry_after });
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ClientError> {
        debug!("GET {}", url);
        let resp = self.client.get(url).headers(self.headers()).send().await?;
        Self::decode(resp).await
    }

    pub(crate) async fn post_graphql<T: for<'de> Deserialize<'de>>(
        &self,
        body: &serde_json::Value,
    ) -> Result<T, ClientError> {
        debug!("POST {}", GRAPHQL_URL);
        let resp = self
            .client
            .post(GRAPHQL_URL)
            .headers(self.headers())
            .json(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Fetch one pull request
    pub async fn get_pull(&self, repo: &RepoRef, number: i32) -> Result<GithubPr, ClientError> {
        let url = format!(
            "https://api.github.com/repos/{}/{}/pulls/{}",
            repo.owner, repo.name, number
        );
        self.get(&url).await
    }

    /// Fetch all submitted reviews for a PR
    pub async fn list_reviews(
        &self,
        repo: &RepoRef,
        number: i32,
    ) -> Result<Vec<GithubReview>, ClientError> {
        let url = format!(
            "https://api.github.com/repos/{}/{}/pulls/{}/reviews?per_page=100",
            repo.owner, repo.name, number
        );
        self.get(&url).await
    }

    /// Fetch plain conversation comments for a PR
    pub async fn list_issue_comments(
        &self,
        repo: &RepoRef,
        number: i32,
    ) -> Result<Vec<GithubComment>, ClientError> {
        let url = format!(
            "https://api.github.com/repos/{}/{}/issues/{}/comments?per_page=100",
            repo.owner, repo.name, number
        );
        self.get(&url).await
    }

    /// Fetch emoji reactions on the PR conversation
    pub async fn list_pr_reactions(
        &self,
        repo: &RepoRef,
        number: i32,
    ) -> Result<Vec<GithubReaction>, ClientError> {
        let url = format!(
            "https://api.github.com/repos/{}/{}/issues/{}/reactions?per_page=100",
            repo.owner, repo.name, number
        );
        self.get(&url).await
    }
}
