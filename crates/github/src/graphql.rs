//! GraphQL queries for paginated PR activity fetching
//!
//! One query pulls a page of PRs together with the review, comment and
//! reaction activity nested under each node, so a full repository scan
//! costs one request per page instead of one per PR.

use chrono::{DateTime, Utc};
use common::models::RepoRef;
use serde::Deserialize;
use serde_json::json;

use crate::client::{ClientError, GitHubClient};

/// How many activity items (reviews, comments, reactions) to request per PR
pub const ACTIVITY_CAP: u32 = 30;

/// Which PRs a scan should cover, and in what order GitHub returns them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrSelection {
    /// All PRs regardless of state, most recently updated first
    RecentlyUpdated,
    /// Open PRs only, newest first
    OpenOnly,
}

impl PrSelection {
    fn states(&self) -> Vec<&'static str> {
        match self {
            PrSelection::RecentlyUpdated => vec!["OPEN", "CLOSED", "MERGED"],
            PrSelection::OpenOnly => vec!["OPEN"],
        }
    }

    fn order_field(&self) -> &'static str {
        match self {
            PrSelection::RecentlyUpdated => "UPDATED_AT",
            PrSelection::OpenOnly => "CREATED_AT",
        }
    }
}

const PR_PAGE_QUERY: &str = r#"
query PrActivityPage($owner: String!, $name: String!, $pageSize: Int!, $cursor: String, $activityCap: Int!, $states: [PullRequestState!], $orderBy: IssueOrder!) {
  repository(owner: $owner, name: $name) {
    pullRequests(first: $pageSize, after: $cursor, states: $states, orderBy: $orderBy) {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        number
        title
        url
        createdAt
        reviews(first: $activityCap) {
          nodes {
            author { login }
            state
            submittedAt
          }
        }
        comments(first: $activityCap) {
          nodes {
            author { login }
            createdAt
          }
        }
        reactions(first: $activityCap) {
          nodes {
            user { login }
            createdAt
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct PrQueryData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    pull_requests: PrPage,
}

/// One page of PRs with its pagination cursor
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrPage {
    pub page_info: PageInfo,
    pub nodes: Vec<PrNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// A PR node with its nested activity, straight off the wire
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrNode {
    pub number: i32,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reviews: Connection<ReviewNode>,
    #[serde(default)]
    pub comments: Connection<CommentNode>,
    #[serde(default)]
    pub reactions: Connection<ReactionNode>,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewNode {
    pub author: Option<Actor>,
    pub state: String,
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub author: Option<Actor>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionNode {
    pub user: Option<Actor>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Actor {
    pub login: String,
}

impl GitHubClient {
    /// Fetch one page of PRs with nested activity
    pub async fn fetch_pr_page(
        &self,
        repo: &RepoRef,
        selection: PrSelection,
        cursor: Option<String>,
        page_size: u32,
    ) -> Result<PrPage, ClientError> {
        let body = json!({
            "query": PR_PAGE_QUERY,
            "variables": {
                "owner": repo.owner,
                "name": repo.name,
                "pageSize": page_size,
                "cursor": cursor,
                "activityCap": ACTIVITY_CAP,
                "states": selection.states(),
                "orderBy": { "field": selection.order_field(), "direction": "DESC" },
            },
        });

        let envelope: GraphQlEnvelope<PrQueryData> = self.post_graphql(&body).await?;

        if let Some(errors) = envelope.errors {
            let joined = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ClientError::Graph(joined));
        }

        let data = envelope
            .data
            .ok_or_else(|| ClientError::Graph("response had no data".to_string()))?;
        let repository = data
            .repository
            .ok_or_else(|| ClientError::NotFound(repo.full_name()))?;

        Ok(repository.pull_requests)
    }
}
