//! PR activity aggregation and scoring
//!
//! Pages through a repository's pull requests under a hard page budget,
//! normalizes each PR's review and comment activity into a timeline, and
//! folds the timelines into leaderboards, rescue scores and neglect
//! rankings.

pub mod fetch;
pub mod leaderboard;
pub mod normalize;
pub mod rank;
pub mod rescue;
pub mod scan;
pub mod snapshot;
pub mod staleness;

pub use rescue::RescueConfig;
pub use scan::RepoScanner;
pub use staleness::StalenessPolicy;

#[cfg(test)]
mod fetch_test;
#[cfg(test)]
mod rank_test;
