//! GitHub API client for PR Rescue
//!
//! Talks to GitHub two ways: a GraphQL query that fetches pages of PRs
//! with their activity nested inline, and a handful of REST endpoints
//! for single-PR lookups.

pub mod client;
pub mod graphql;

pub use client::{
    ClientError, GitHubClient, GithubComment, GithubPr, GithubReaction, GithubReview, GithubUser,
};
pub use graphql::{
    Actor, CommentNode, Connection, PageInfo, PrNode, PrPage, PrSelection, ReactionNode,
    ReviewNode, ACTIVITY_CAP,
};
