//! Raw API nodes to normalized per-PR timelines

use common::models::{
    CommentEvent, PullRequestTimeline, ReactionEvent, ReviewDisposition, ReviewEvent,
};
use github::client::{GithubComment, GithubPr, GithubReaction, GithubReview};
use github::graphql::PrNode;

/// Normalize a batch of fetched PR nodes.
pub fn timelines(nodes: &[PrNode]) -> Vec<PullRequestTimeline> {
    nodes.iter().map(timeline).collect()
}

/// Normalize one PR node.
///
/// Events without an author (deleted accounts) cannot be attributed and are
/// dropped, as are reviews that were never submitted. Unknown review states
/// fall back to `Commented` so schema additions on the API side do not fail
/// a scan.
pub fn timeline(node: &PrNode) -> PullRequestTimeline {
    let mut review_events = Vec::new();
    for review in &node.reviews.nodes {
        let Some(ref author) = review.author else {
            continue;
        };
        let Some(submitted_at) = review.submitted_at else {
            continue;
        };
        review_events.push(ReviewEvent {
            actor: author.login.clone(),
            disposition: ReviewDisposition::from_api(&review.state),
            submitted_at,
        });
    }

    let mut comment_events = Vec::new();
    for comment in &node.comments.nodes {
        let Some(ref author) = comment.author else {
            continue;
        };
        comment_events.push(CommentEvent {
            actor: author.login.clone(),
            posted_at: comment.created_at,
        });
    }

    let mut reaction_events = Vec::new();
    for reaction in &node.reactions.nodes {
        let Some(ref user) = reaction.user else {
            continue;
        };
        reaction_events.push(ReactionEvent {
            actor: user.login.clone(),
            created_at: reaction.created_at,
        });
    }

    PullRequestTimeline {
        number: node.number,
        title: node.title.clone(),
        url: node.url.clone(),
        created_at: node.created_at,
        review_events,
        comment_events,
        reaction_events,
    }
}

/// Build a timeline from the single-PR REST lookups, with the same drop and
/// fail-open rules as the GraphQL path.
pub fn timeline_from_rest(
    pr: &GithubPr,
    reviews: &[GithubReview],
    comments: &[GithubComment],
    reactions: &[GithubReaction],
) -> PullRequestTimeline {
    let mut review_events = Vec::new();
    for review in reviews {
        let Some(ref user) = review.user else {
            continue;
        };
        let Some(submitted_at) = review.submitted_at else {
            continue;
        };
        review_events.push(ReviewEvent {
            actor: user.login.clone(),
            disposition: ReviewDisposition::from_api(&review.state),
            submitted_at,
        });
    }

    let mut comment_events = Vec::new();
    for comment in comments {
        let Some(ref user) = comment.user else {
            continue;
        };
        comment_events.push(CommentEvent {
            actor: user.login.clone(),
            posted_at: comment.created_at,
        });
    }

    let mut reaction_events = Vec::new();
    for reaction in reactions {
        let Some(ref user) = reaction.user else {
            continue;
        };
        reaction_events.push(ReactionEvent {
            actor: user.login.clone(),
            created_at: reaction.created_at,
        });
    }

    PullRequestTimeline {
        number: pr.number,
        title: pr.title.clone(),
        url: pr.html_url.clone(),
        created_at: pr.created_at,
        review_events,
        comment_events,
        reaction_events,
    }
}
