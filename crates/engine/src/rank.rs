//! Final sorting and truncation of aggregated results

use std::collections::HashMap;

use common::models::{LeaderboardEntry, PrWithStatus, RescuerStats, ReviewerStats};

/// How many neglected PRs a scan surfaces. The game UI shows ten quest
/// cards, so this is a product cap rather than a technical one.
pub const NEGLECTED_LIMIT: usize = 10;

/// Anything that can sit on a points leaderboard.
pub trait Scored {
    fn points(&self) -> i64;
}

impl Scored for ReviewerStats {
    fn points(&self) -> i64 {
        self.points
    }
}

impl Scored for RescuerStats {
    fn points(&self) -> i64 {
        self.points
    }
}

/// Sort actors by points descending, assign 1-based ranks, and optionally
/// truncate. Ties keep whatever order the accumulator produced.
pub fn rank_leaderboard<S: Scored>(
    stats: HashMap<String, S>,
    limit: Option<usize>,
) -> Vec<LeaderboardEntry<S>> {
    let mut entries: Vec<(String, S)> = stats.into_iter().collect();
    entries.sort_by(|a, b| b.1.points().cmp(&a.1.points()));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (login, stats))| LeaderboardEntry {
            rank: i as u32 + 1,
            login,
            stats,
        })
        .collect()
}

/// Sort neglected PRs most-urgent-first, oldest-first within a tier, and cap
/// at [`NEGLECTED_LIMIT`].
pub fn rank_neglected(mut prs: Vec<PrWithStatus>) -> Vec<PrWithStatus> {
    prs.sort_by(|a, b| {
        b.status
            .urgency
            .rank()
            .cmp(&a.status.urgency.rank())
            .then(b.age.cmp(&a.age))
    });
    prs.truncate(NEGLECTED_LIMIT);
    prs
}
