//! Review leaderboard aggregation

use std::collections::{HashMap, HashSet};

use common::models::{PullRequestTimeline, ReviewDisposition, ReviewerStats};

pub const POINTS_APPROVAL: i64 = 50;
pub const POINTS_CHANGES_REQUESTED: i64 = 30;
pub const POINTS_REVIEW_COMMENT: i64 = 10;
pub const POINTS_PLAIN_COMMENT: i64 = 5;
pub const POINTS_REACTION: i64 = 2;

/// Fold timelines into per-actor review statistics.
///
/// Per PR, only an actor's first review counts; later reviews on the same PR
/// would let re-review spam inflate the board. Plain comments and reactions
/// are counted every time.
pub fn aggregate(timelines: &[PullRequestTimeline]) -> HashMap<String, ReviewerStats> {
    let mut stats: HashMap<String, ReviewerStats> = HashMap::new();

    for timeline in timelines {
        let mut counted: HashSet<&str> = HashSet::new();

        for review in &timeline.review_events {
            if !counted.insert(review.actor.as_str()) {
                continue;
            }
            let entry = stats.entry(review.actor.clone()).or_default();
            entry.review_count += 1;
            match review.disposition {
                ReviewDisposition::Approved => {
                    entry.approvals += 1;
                    entry.points += POINTS_APPROVAL;
                }
                ReviewDisposition::ChangesRequested => {
                    entry.changes_requested += 1;
                    entry.points += POINTS_CHANGES_REQUESTED;
                }
                ReviewDisposition::Commented => {
                    entry.review_comments += 1;
                    entry.points += POINTS_REVIEW_COMMENT;
                }
            }
        }

        for comment in &timeline.comment_events {
            let entry = stats.entry(comment.actor.clone()).or_default();
            entry.plain_comments += 1;
            entry.points += POINTS_PLAIN_COMMENT;
        }

        for reaction in &timeline.reaction_events {
            let entry = stats.entry(reaction.actor.clone()).or_default();
            entry.reaction_count += 1;
            entry.points += POINTS_REACTION;
        }
    }

    stats
}
