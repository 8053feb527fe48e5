//! Repository scans tying fetch, normalize, score and rank together

use chrono::{DateTime, Utc};
use common::models::{
    LeaderboardEntry, PrWithStatus, PullRequestTimeline, RepoRef, RescuerStats, ReviewerStats,
    TimeUnit,
};
use common::Config;
use github::client::ClientError;
use github::graphql::PrSelection;
use github::GitHubClient;
use tracing::{debug, info};

use crate::fetch::{fetch_all, RepoSource};
use crate::rescue::RescueConfig;
use crate::{leaderboard, normalize, rank, rescue, staleness};

/// Runs whole-repository scans.
///
/// Holds no per-run state; every scan owns its own accumulators, so
/// independent scans can run concurrently off one scanner.
pub struct RepoScanner {
    client: GitHubClient,
    page_size: u32,
    max_pages: u32,
}

impl RepoScanner {
    pub fn new(client: GitHubClient, page_size: u32, max_pages: u32) -> Self {
        Self {
            client,
            page_size,
            max_pages,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            GitHubClient::new(config.github_token.clone()),
            config.page_size,
            config.max_pages,
        )
    }

    async fn fetch_timelines(
        &self,
        repo: &RepoRef,
        selection: PrSelection,
    ) -> Result<Vec<PullRequestTimeline>, ClientError> {
        let source = RepoSource::new(self.client.clone(), repo.clone(), selection);
        let nodes = fetch_all(&source, self.page_size, self.max_pages).await?;
        info!("Fetched {} PRs from {}", nodes.len(), repo.full_name());
        Ok(normalize::timelines(&nodes))
    }

    /// Review-points leaderboard over recently updated PRs.
    pub async fn review_leaderboard(
        &self,
        repo: &RepoRef,
        limit: Option<usize>,
    ) -> Result<Vec<LeaderboardEntry<ReviewerStats>>, ClientError> {
        info!("Scanning {} for review activity", repo.full_name());
        let timelines = self
            .fetch_timelines(repo, PrSelection::RecentlyUpdated)
            .await?;
        let stats = leaderboard::aggregate(&timelines);
        Ok(rank::rank_leaderboard(stats, limit))
    }

    /// Rescue-points leaderboard over recently updated PRs.
    pub async fn rescue_leaderboard(
        &self,
        repo: &RepoRef,
        config: &RescueConfig,
        limit: Option<usize>,
    ) -> Result<Vec<LeaderboardEntry<RescuerStats>>, ClientError> {
        info!(
            "Scanning {} for rescues (min age {} {})",
            repo.full_name(),
            config.min_age,
            config.time_unit.label()
        );
        let timelines = self
            .fetch_timelines(repo, PrSelection::RecentlyUpdated)
            .await?;
        let stats = rescue::score(&timelines, config);
        Ok(rank::rank_leaderboard(stats, limit))
    }

    /// Most neglected open PRs, most urgent first.
    pub async fn neglected_prs(
        &self,
        repo: &RepoRef,
        unit: TimeUnit,
        only_unreviewed: bool,
    ) -> Result<Vec<PrWithStatus>, ClientError> {
        info!("Scanning {} for neglected PRs", repo.full_name());
        let timelines = self.fetch_timelines(repo, PrSelection::OpenOnly).await?;

        let now = Utc::now();
        let mut prs = Vec::new();
        for timeline in timelines {
            if only_unreviewed && !timeline.review_events.is_empty() {
                continue;
            }
            prs.push(with_status(timeline, unit, now));
        }

        Ok(rank::rank_neglected(prs))
    }

    /// Status of a single PR via the REST lookups.
    pub async fn pr_status(
        &self,
        repo: &RepoRef,
        number: i32,
        unit: TimeUnit,
    ) -> Result<PrWithStatus, ClientError> {
        debug!("Fetching status for {}#{}", repo.full_name(), number);
        let pr = self.client.get_pull(repo, number).await?;
        let reviews = self.client.list_reviews(repo, number).await?;
        let comments = self.client.list_issue_comments(repo, number).await?;
        let reactions = self.client.list_pr_reactions(repo, number).await?;

        let timeline = normalize::timeline_from_rest(&pr, &reviews, &comments, &reactions);
        Ok(with_status(timeline, unit, Utc::now()))
    }
}

fn with_status(timeline: PullRequestTimeline, unit: TimeUnit, now: DateTime<Utc>) -> PrWithStatus {
    let review_count = timeline.review_events.len() as u32;
    let comment_count = timeline.comment_events.len() as u32;
    let age = timeline.age(unit, now);
    let status = staleness::classify(age, review_count, comment_count, unit);

    PrWithStatus {
        number: timeline.number,
        title: timeline.title,
        url: timeline.url,
        created_at: timeline.created_at,
        review_count,
        comment_count,
        age,
        status,
    }
}
