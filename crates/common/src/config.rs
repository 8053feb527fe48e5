//! Application configuration

use std::env;

/// Launcher configuration, bound from environment variables.
///
/// Everything the engine itself needs is passed as plain parameters; only
/// the launcher reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    /// PRs requested per page.
    pub page_size: u32,
    /// Hard ceiling on page requests per run.
    pub max_pages: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            github_token: env::var("GITHUB_TOKEN").ok(),
            page_size: env::var("PR_RESCUE_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            max_pages: env::var("PR_RESCUE_MAX_PAGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6),
        }
    }
}
