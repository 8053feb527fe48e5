//! PR neglect classification

use common::models::{PrStatus, TimeUnit, Urgency};

/// Unit-scaled age boundaries, inclusive at the low end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: i64,
    pub urgent: i64,
    pub critical: i64,
}

impl Thresholds {
    pub fn for_unit(unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Hours => Self {
                warning: 1,
                urgent: 3,
                critical: 6,
            },
            TimeUnit::Days => Self {
                warning: 3,
                urgent: 7,
                critical: 14,
            },
        }
    }

    /// Tier for a given age, or `None` below the warning boundary.
    pub fn tier(&self, age: i64) -> Option<Urgency> {
        if age >= self.critical {
            Some(Urgency::Critical)
        } else if age >= self.urgent {
            Some(Urgency::Urgent)
        } else if age >= self.warning {
            Some(Urgency::Warning)
        } else {
            None
        }
    }
}

/// How staleness weighs reviews against comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalenessPolicy {
    /// A formal review marks the PR safe no matter how old it is; only
    /// comment-only or untouched PRs can escalate.
    #[default]
    ReviewOverride,
    /// Any activity at all, including a lone comment, marks the PR safe.
    BlendedActivity,
}

/// Classify a PR's neglect under the default policy.
pub fn classify(age: i64, review_count: u32, comment_count: u32, unit: TimeUnit) -> PrStatus {
    classify_with_policy(
        age,
        review_count,
        comment_count,
        unit,
        StalenessPolicy::default(),
    )
}

/// Classify a PR's neglect.
///
/// First matching rule wins. The two policies disagree on whether a single
/// stale comment suppresses escalation; both are kept so the choice stays a
/// one-line swap.
pub fn classify_with_policy(
    age: i64,
    review_count: u32,
    comment_count: u32,
    unit: TimeUnit,
    policy: StalenessPolicy,
) -> PrStatus {
    let thresholds = Thresholds::for_unit(unit);

    match policy {
        StalenessPolicy::ReviewOverride => {
            if review_count > 0 {
                return PrStatus::new(Urgency::Normal, "Reviewed");
            }
            match thresholds.tier(age) {
                Some(urgency) => {
                    let message = if comment_count > 0 {
                        format!("Discussed but not reviewed for {} {}", age, unit.label())
                    } else {
                        format!("No activity for {} {}", age, unit.label())
                    };
                    PrStatus::new(urgency, message)
                }
                None => PrStatus::new(Urgency::Normal, "Recently opened"),
            }
        }
        StalenessPolicy::BlendedActivity => {
            if review_count + comment_count > 0 {
                return PrStatus::new(Urgency::Normal, "Has activity");
            }
            match thresholds.tier(age) {
                Some(urgency) => PrStatus::new(
                    urgency,
                    format!("No activity for {} {}", age, unit.label()),
                ),
                None => PrStatus::new(Urgency::Normal, "Recently opened"),
            }
        }
    }
}
