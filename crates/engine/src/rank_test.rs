#[cfg(test)]
mod tests {
    use crate::rank::*;
    use chrono::{TimeZone, Utc};
    use common::models::{PrStatus, PrWithStatus, ReviewerStats, Urgency};
    use std::collections::HashMap;

    fn stats_with_points(points: i64) -> ReviewerStats {
        ReviewerStats {
            points,
            ..Default::default()
        }
    }

    fn make_pr(number: i32, urgency: Urgency, age: i64) -> PrWithStatus {
        PrWithStatus {
            number,
            title: format!("PR {}", number),
            url: format!("https://github.com/acme/widgets/pull/{}", number),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            review_count: 0,
            comment_count: 0,
            age,
            status: PrStatus::new(urgency, "status"),
        }
    }

    #[test]
    fn test_leaderboard_sorted_by_points_descending() {
        let mut stats = HashMap::new();
        stats.insert("alice".to_string(), stats_with_points(10));
        stats.insert("bob".to_string(), stats_with_points(50));
        stats.insert("carol".to_string(), stats_with_points(30));
        stats.insert("dave".to_string(), stats_with_points(20));

        let entries = rank_leaderboard(stats, None);

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].login, "bob");
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[3].login, "alice");
        assert_eq!(entries[3].rank, 4);
        for pair in entries.windows(2) {
            assert!(pair[0].stats.points >= pair[1].stats.points);
        }
    }

    #[test]
    fn test_leaderboard_truncation() {
        let mut stats = HashMap::new();
        stats.insert("alice".to_string(), stats_with_points(10));
        stats.insert("bob".to_string(), stats_with_points(50));
        stats.insert("carol".to_string(), stats_with_points(30));

        let entries = rank_leaderboard(stats, Some(2));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].login, "bob");
        assert_eq!(entries[1].login, "carol");
    }

    #[test]
    fn test_empty_leaderboard() {
        let entries = rank_leaderboard(HashMap::<String, ReviewerStats>::new(), Some(10));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_neglected_sorted_by_urgency_then_age() {
        let prs = vec![
            make_pr(1, Urgency::Warning, 100),
            make_pr(2, Urgency::Critical, 20),
            make_pr(3, Urgency::Urgent, 9),
            make_pr(4, Urgency::Critical, 30),
            make_pr(5, Urgency::Normal, 1),
        ];

        let ranked = rank_neglected(prs);

        let numbers: Vec<i32> = ranked.iter().map(|pr| pr.number).collect();
        assert_eq!(numbers, vec![4, 2, 3, 1, 5]);
    }

    #[test]
    fn test_neglected_truncated_to_ten() {
        let prs: Vec<PrWithStatus> = (1..=12)
            .map(|n| make_pr(n, Urgency::Critical, n as i64))
            .collect();

        let ranked = rank_neglected(prs);

        assert_eq!(ranked.len(), 10);
        // Oldest first within the tier
        assert_eq!(ranked[0].age, 12);
        assert_eq!(ranked[9].age, 3);
    }

    #[test]
    fn test_neglected_empty_input() {
        assert!(rank_neglected(vec![]).is_empty());
    }
}
