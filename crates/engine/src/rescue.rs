//! Rescue scoring: rewarding action on old, neglected PRs

use std::collections::{HashMap, HashSet};

use common::models::{PullRequestTimeline, RescuerStats, ReviewDisposition, TimeUnit, Urgency};

use crate::staleness::Thresholds;

pub const RESCUE_POINTS_CRITICAL: i64 = 100;
pub const RESCUE_POINTS_URGENT: i64 = 50;
pub const RESCUE_POINTS_WARNING: i64 = 25;

/// Rescue scoring configuration.
#[derive(Debug, Clone)]
pub struct RescueConfig {
    /// Minimum PR age at the moment of action for it to count at all.
    pub min_age: i64,
    pub time_unit: TimeUnit,
    /// Whether plain conversation comments can earn (half) rescue credit.
    pub count_comments: bool,
}

impl Default for RescueConfig {
    fn default() -> Self {
        Self {
            min_age: 3,
            time_unit: TimeUnit::Days,
            count_comments: true,
        }
    }
}

fn tier_points(urgency: Urgency) -> i64 {
    match urgency {
        Urgency::Critical => RESCUE_POINTS_CRITICAL,
        Urgency::Urgent => RESCUE_POINTS_URGENT,
        Urgency::Warning => RESCUE_POINTS_WARNING,
        Urgency::Normal => 0,
    }
}

fn record_tier(entry: &mut RescuerStats, urgency: Urgency) {
    entry.rescue_count += 1;
    match urgency {
        Urgency::Critical => entry.critical_rescues += 1,
        Urgency::Urgent => entry.urgent_rescues += 1,
        Urgency::Warning => entry.warning_rescues += 1,
        Urgency::Normal => {}
    }
}

/// Fold timelines into per-actor rescue statistics.
///
/// Each action is judged by the PR's age at the moment it happened, not the
/// PR's age now. Formal reviews earn the full tier base; commented reviews
/// and plain comments earn half, rounded down. Per PR, an actor's first
/// qualifying review is the only one credited, and once an actor holds a
/// credited review their comments on that PR earn nothing more.
pub fn score(
    timelines: &[PullRequestTimeline],
    config: &RescueConfig,
) -> HashMap<String, RescuerStats> {
    let thresholds = Thresholds::for_unit(config.time_unit);
    let mut stats: HashMap<String, RescuerStats> = HashMap::new();

    for timeline in timelines {
        let mut credited: HashSet<&str> = HashSet::new();

        for review in &timeline.review_events {
            if credited.contains(review.actor.as_str()) {
                continue;
            }
            let age = config
                .time_unit
                .between(timeline.created_at, review.submitted_at);
            if age < config.min_age {
                continue;
            }
            let Some(urgency) = thresholds.tier(age) else {
                continue;
            };

            credited.insert(review.actor.as_str());
            let entry = stats.entry(review.actor.clone()).or_default();
            record_tier(entry, urgency);
            let base = tier_points(urgency);
            match review.disposition {
                ReviewDisposition::Approved => {
                    entry.approvals += 1;
                    entry.points += base;
                }
                ReviewDisposition::ChangesRequested => {
                    entry.changes_requested += 1;
                    entry.points += base;
                }
                ReviewDisposition::Commented => {
                    entry.comments += 1;
                    entry.points += base / 2;
                }
            }
        }

        if config.count_comments {
            for comment in &timeline.comment_events {
                if credited.contains(comment.actor.as_str()) {
                    continue;
                }
                let age = config
                    .time_unit
                    .between(timeline.created_at, comment.posted_at);
                if age < config.min_age {
                    continue;
                }
                let Some(urgency) = thresholds.tier(age) else {
                    continue;
                };

                let entry = stats.entry(comment.actor.clone()).or_default();
                record_tier(entry, urgency);
                entry.comments += 1;
                entry.points += tier_points(urgency) / 2;
            }
        }
    }

    stats
}
