//! PR Rescue command-line interface

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use common::models::{RepoRef, TimeUnit};
use engine::{RepoScanner, RescueConfig};
use tracing::info;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Leaderboards and rescue scores for GitHub PR review activity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review-points leaderboard for a repository
    Leaderboard {
        #[command(flatten)]
        scan: ScanArgs,

        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Rescue-points leaderboard, rewarding action on old PRs
    Rescuers {
        #[command(flatten)]
        scan: ScanArgs,

        /// Minimum PR age at the moment of action, in time units
        #[arg(long, default_value_t = 3)]
        min_age: i64,

        /// Ignore plain comments when awarding rescue credit
        #[arg(long)]
        no_comments: bool,

        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Most neglected open PRs, most urgent first
    Neglected {
        #[command(flatten)]
        scan: ScanArgs,

        /// Skip PRs that already have a review
        #[arg(long)]
        only_unreviewed: bool,
    },

    /// Neglect status of a single PR
    Status {
        #[command(flatten)]
        scan: ScanArgs,

        /// PR number
        number: i32,
    },
}

#[derive(Args)]
struct ScanArgs {
    /// Repository in owner/name form
    repo: String,

    /// Unit for ages and thresholds (hours or days)
    #[arg(long, default_value = "days")]
    unit: TimeUnit,
}

fn parse_repo(s: &str) -> Result<RepoRef> {
    RepoRef::from_full_name(s).ok_or_else(|| anyhow!("expected owner/name, got `{}`", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pr_rescue=info".parse()?)
                .add_directive("engine=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = common::Config::from_env();
    if config.github_token.is_none() {
        info!("No GITHUB_TOKEN set, scanning unauthenticated");
    }
    let scanner = RepoScanner::from_config(&config);

    match cli.command {
        Commands::Leaderboard { scan, limit } => {
            let repo = parse_repo(&scan.repo)?;
            let entries = scanner.review_leaderboard(&repo, limit).await?;
            commands::print_review_leaderboard(&repo, &entries);
        }
        Commands::Rescuers {
            scan,
            min_age,
            no_comments,
            limit,
        } => {
            let repo = parse_repo(&scan.repo)?;
            let rescue_config = RescueConfig {
                min_age,
                time_unit: scan.unit,
                count_comments: !no_comments,
            };
            let entries = scanner
                .rescue_leaderboard(&repo, &rescue_config, limit)
                .await?;
            commands::print_rescue_leaderboard(&repo, &entries);
        }
        Commands::Neglected {
            scan,
            only_unreviewed,
        } => {
            let repo = parse_repo(&scan.repo)?;
            let prs = scanner
                .neglected_prs(&repo, scan.unit, only_unreviewed)
                .await?;
            commands::print_neglected(&repo, &prs);
        }
        Commands::Status { scan, number } => {
            let repo = parse_repo(&scan.repo)?;
            let pr = scanner.pr_status(&repo, number, scan.unit).await?;
            commands::print_status(&pr);
        }
    }

    Ok(())
}
