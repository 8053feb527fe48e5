//! Cursor-paginated PR fetching under a page budget

use async_trait::async_trait;
use common::models::RepoRef;
use github::client::ClientError;
use github::graphql::{PrNode, PrPage, PrSelection};
use github::GitHubClient;
use tracing::{debug, warn};

/// Anything that can serve cursor-paginated pages of PRs.
///
/// The production implementation is [`RepoSource`]; tests substitute scripted
/// sources to exercise the pagination loop without a network.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(
        &self,
        cursor: Option<String>,
        page_size: u32,
    ) -> Result<PrPage, ClientError>;
}

/// Live source backed by the GraphQL client.
pub struct RepoSource {
    client: GitHubClient,
    repo: RepoRef,
    selection: PrSelection,
}

impl RepoSource {
    pub fn new(client: GitHubClient, repo: RepoRef, selection: PrSelection) -> Self {
        Self {
            client,
            repo,
            selection,
        }
    }
}

#[async_trait]
impl PageSource for RepoSource {
    async fn fetch_page(
        &self,
        cursor: Option<String>,
        page_size: u32,
    ) -> Result<PrPage, ClientError> {
        self.client
            .fetch_pr_page(&self.repo, self.selection, cursor, page_size)
            .await
    }
}

/// Where the pagination loop stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// No request issued yet.
    Fetching,
    /// Last page reported more data behind this cursor.
    HasMore(String),
    /// Source ran out of pages, or the ceiling cut the scan short.
    Exhausted,
    /// A request failed; the run is over.
    Failed,
}

/// Explicit pagination state machine.
///
/// Requests are issued one at a time because each depends on the cursor
/// returned by the previous one. The paginator never retries; a failed
/// request fails the whole run.
pub struct Paginator {
    state: PageState,
    pages_fetched: u32,
    page_size: u32,
    max_pages: u32,
}

impl Paginator {
    pub fn new(page_size: u32, max_pages: u32) -> Self {
        Self {
            state: PageState::Fetching,
            pages_fetched: 0,
            page_size,
            max_pages,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Fetch the next page, if any.
    ///
    /// `Ok(Some(nodes))` after a successful request, `Ok(None)` once the
    /// source is exhausted or the page ceiling is hit, `Err` on the first
    /// request failure.
    pub async fn advance(
        &mut self,
        source: &dyn PageSource,
    ) -> Result<Option<Vec<PrNode>>, ClientError> {
        let cursor = match &self.state {
            PageState::Fetching => None,
            PageState::HasMore(cursor) => Some(cursor.clone()),
            PageState::Exhausted | PageState::Failed => return Ok(None),
        };

        if self.pages_fetched >= self.max_pages {
            warn!(
                "Stopping after {} pages with more history available",
                self.pages_fetched
            );
            self.state = PageState::Exhausted;
            return Ok(None);
        }

        let page = match source.fetch_page(cursor, self.page_size).await {
            Ok(page) => page,
            Err(e) => {
                self.state = PageState::Failed;
                return Err(e);
            }
        };

        self.pages_fetched += 1;
        self.state = match (page.page_info.has_next_page, page.page_info.end_cursor) {
            (true, Some(cursor)) => PageState::HasMore(cursor),
            // A page claiming more data without a cursor cannot be followed
            _ => PageState::Exhausted,
        };

        Ok(Some(page.nodes))
    }
}

/// Drive a paginator to completion and collect every fetched PR node.
pub async fn fetch_all(
    source: &dyn PageSource,
    page_size: u32,
    max_pages: u32,
) -> Result<Vec<PrNode>, ClientError> {
    let mut paginator = Paginator::new(page_size, max_pages);
    let mut nodes = Vec::new();

    while let Some(page) = paginator.advance(source).await? {
        debug!(
            "Fetched page {} with {} PRs",
            paginator.pages_fetched(),
            page.len()
        );
        nodes.extend(page);
    }

    Ok(nodes)
}
