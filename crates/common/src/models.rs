//! Domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse `"owner/name"` into a `RepoRef`.
    pub fn from_full_name(s: &str) -> Option<Self> {
        let (owner, name) = s.split_once('/')?;
        if owner.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(owner, name))
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Unit used for PR ages and neglect thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    #[default]
    Days,
}

impl TimeUnit {
    /// Whole units between two instants, truncated toward zero.
    pub fn between(self, from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
        let span = to - from;
        match self {
            TimeUnit::Hours => span.num_hours(),
            TimeUnit::Days => span.num_days(),
        }
    }

    /// Label used in status messages.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hours" | "hour" | "h" => Ok(TimeUnit::Hours),
            "days" | "day" | "d" => Ok(TimeUnit::Days),
            other => Err(format!("unknown time unit: {other}")),
        }
    }
}

/// Formal review outcome as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewDisposition {
    Approved,
    ChangesRequested,
    Commented,
}

impl ReviewDisposition {
    /// Parse an API review state. Unknown values collapse to `Commented` so
    /// schema additions cannot break scoring.
    pub fn from_api(state: &str) -> Self {
        match state.to_ascii_uppercase().as_str() {
            "APPROVED" => ReviewDisposition::Approved,
            "CHANGES_REQUESTED" => ReviewDisposition::ChangesRequested,
            _ => ReviewDisposition::Commented,
        }
    }

    /// Approved and ChangesRequested carry reviewer authority; a Commented
    /// review does not.
    pub fn is_formal(self) -> bool {
        matches!(
            self,
            ReviewDisposition::Approved | ReviewDisposition::ChangesRequested
        )
    }
}

/// A submitted formal review on a PR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEvent {
    pub actor: String,
    pub disposition: ReviewDisposition,
    pub submitted_at: DateTime<Utc>,
}

/// A plain conversation comment on a PR (not part of a formal review).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentEvent {
    pub actor: String,
    pub posted_at: DateTime<Utc>,
}

/// An emoji reaction on the PR conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub actor: String,
    pub created_at: DateTime<Utc>,
}

/// Normalized activity for one pull request.
///
/// Event order matches whatever the source returned; consumers establish
/// the orderings they need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestTimeline {
    pub number: i32,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub review_events: Vec<ReviewEvent>,
    pub comment_events: Vec<CommentEvent>,
    pub reaction_events: Vec<ReactionEvent>,
}

impl PullRequestTimeline {
    /// PR age at `now`, in whole `unit`s.
    pub fn age(&self, unit: TimeUnit, now: DateTime<Utc>) -> i64 {
        unit.between(self.created_at, now)
    }
}

/// Cumulative review activity for one actor within a single run.
///
/// Invariant: `review_count == approvals + changes_requested + review_comments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewerStats {
    pub review_count: u32,
    pub approvals: u32,
    pub changes_requested: u32,
    /// Formal reviews whose only outcome was a comment.
    pub review_comments: u32,
    pub plain_comments: u32,
    pub reaction_count: u32,
    pub points: i64,
}

/// Rescue activity for one actor within a single run.
///
/// Invariant: `rescue_count == critical_rescues + urgent_rescues + warning_rescues`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RescuerStats {
    pub rescue_count: u32,
    pub critical_rescues: u32,
    pub urgent_rescues: u32,
    pub warning_rescues: u32,
    pub approvals: u32,
    pub changes_requested: u32,
    pub comments: u32,
    pub points: i64,
}

/// Neglect severity, critical highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Warning,
    Urgent,
    Critical,
}

impl Urgency {
    /// Numeric tier (critical = 4 down to normal = 1), the sort key the game
    /// UI expects.
    pub fn rank(self) -> u8 {
        match self {
            Urgency::Normal => 1,
            Urgency::Warning => 2,
            Urgency::Urgent => 3,
            Urgency::Critical => 4,
        }
    }

    /// Card color used by the game UI.
    pub fn severity_color(self) -> &'static str {
        match self {
            Urgency::Normal => "#2ecc71",
            Urgency::Warning => "#f1c40f",
            Urgency::Urgent => "#e67e22",
            Urgency::Critical => "#e74c3c",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Urgency::Normal => "✅",
            Urgency::Warning => "⏰",
            Urgency::Urgent => "🔥",
            Urgency::Critical => "🚨",
        }
    }
}

/// Human-readable neglect status for one PR.
///
/// Derived on every classification call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrStatus {
    pub urgency: Urgency,
    pub message: String,
    pub severity_color: String,
    pub emoji: String,
}

impl PrStatus {
    pub fn new(urgency: Urgency, message: impl Into<String>) -> Self {
        Self {
            urgency,
            message: message.into(),
            severity_color: urgency.severity_color().to_string(),
            emoji: urgency.emoji().to_string(),
        }
    }
}

/// A PR with its derived neglect status, ready for the game UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrWithStatus {
    pub number: i32,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub review_count: u32,
    pub comment_count: u32,
    /// Age at scan time, in the run's time unit.
    pub age: i64,
    pub status: PrStatus,
}

/// One row of a ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry<S> {
    pub rank: u32,
    pub login: String,
    pub stats: S,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_repo_ref_from_full_name() {
        let repo = RepoRef::from_full_name("rust-lang/rust").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
        assert_eq!(repo.full_name(), "rust-lang/rust");

        assert!(RepoRef::from_full_name("no-slash").is_none());
        assert!(RepoRef::from_full_name("/name").is_none());
        assert!(RepoRef::from_full_name("owner/").is_none());
    }

    #[test]
    fn test_time_unit_between_truncates() {
        let from = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2026, 1, 4, 23, 0, 0).unwrap();

        // 3 days 23 hours: truncates to 3 days, 95 hours.
        assert_eq!(TimeUnit::Days.between(from, to), 3);
        assert_eq!(TimeUnit::Hours.between(from, to), 95);
    }

    #[test]
    fn test_disposition_from_api_fail_open() {
        assert_eq!(
            ReviewDisposition::from_api("APPROVED"),
            ReviewDisposition::Approved
        );
        assert_eq!(
            ReviewDisposition::from_api("changes_requested"),
            ReviewDisposition::ChangesRequested
        );
        assert_eq!(
            ReviewDisposition::from_api("COMMENTED"),
            ReviewDisposition::Commented
        );
        // Unknown and historical states fall back to Commented.
        assert_eq!(
            ReviewDisposition::from_api("DISMISSED"),
            ReviewDisposition::Commented
        );
        assert_eq!(
            ReviewDisposition::from_api("SOME_FUTURE_STATE"),
            ReviewDisposition::Commented
        );
    }

    #[test]
    fn test_time_unit_parses_short_forms() {
        assert_eq!("hours".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert_eq!("h".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert_eq!("day".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
        assert!("weeks".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_formal_dispositions() {
        assert!(ReviewDisposition::Approved.is_formal());
        assert!(ReviewDisposition::ChangesRequested.is_formal());
        assert!(!ReviewDisposition::Commented.is_formal());
    }

    #[test]
    fn test_urgency_total_order() {
        assert!(Urgency::Critical > Urgency::Urgent);
        assert!(Urgency::Urgent > Urgency::Warning);
        assert!(Urgency::Warning > Urgency::Normal);
        assert_eq!(Urgency::Critical.rank(), 4);
        assert_eq!(Urgency::Normal.rank(), 1);
    }
}
