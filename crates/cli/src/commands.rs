//! Terminal output for scan results

use common::models::{LeaderboardEntry, PrWithStatus, RepoRef, RescuerStats, ReviewerStats};

fn medal(rank: u32) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "  ",
    }
}

pub fn print_review_leaderboard(repo: &RepoRef, entries: &[LeaderboardEntry<ReviewerStats>]) {
    if entries.is_empty() {
        println!(
            "No review activity found in {}. Get reviewing! 🔍",
            repo.full_name()
        );
        return;
    }

    println!("👑 Review Leaderboard — {}\n", repo.full_name());
    for entry in entries {
        println!(
            "{} #{} {} — {} pts ({} reviews, {} comments)",
            medal(entry.rank),
            entry.rank,
            entry.login,
            entry.stats.points,
            entry.stats.review_count,
            entry.stats.plain_comments
        );
    }
}

pub fn print_rescue_leaderboard(repo: &RepoRef, entries: &[LeaderboardEntry<RescuerStats>]) {
    if entries.is_empty() {
        println!(
            "No rescues yet in {}. Old PRs are waiting! 🚑",
            repo.full_name()
        );
        return;
    }

    println!("🚑 Rescue Leaderboard — {}\n", repo.full_name());
    for entry in entries {
        println!(
            "{} #{} {} — {} pts ({} rescues: {} critical, {} urgent, {} warning)",
            medal(entry.rank),
            entry.rank,
            entry.login,
            entry.stats.points,
            entry.stats.rescue_count,
            entry.stats.critical_rescues,
            entry.stats.urgent_rescues,
            entry.stats.warning_rescues
        );
    }
}

pub fn print_neglected(repo: &RepoRef, prs: &[PrWithStatus]) {
    if prs.is_empty() {
        println!("No neglected PRs in {}. All caught up! 🎉", repo.full_name());
        return;
    }

    println!("🚨 Neglected PRs — {}\n", repo.full_name());
    for pr in prs {
        println!(
            "{} #{} {} — {}",
            pr.status.emoji, pr.number, pr.title, pr.status.message
        );
        println!(
            "   {} ({} reviews, {} comments)",
            pr.url, pr.review_count, pr.comment_count
        );
    }
}

pub fn print_status(pr: &PrWithStatus) {
    println!("{} PR #{}: {}", pr.status.emoji, pr.number, pr.title);
    println!("   {}", pr.status.message);
    println!(
        "   {} reviews, {} comments — {}",
        pr.review_count, pr.comment_count, pr.url
    );
}
