//! Projection of nested profiles into flat per-post rows for tabular
//! export.

use serde::Serialize;
use truthgen_core::{Post, Profile};

use crate::html::strip_tags;

/// One exportable row for a (profile, post) pair, or for a post-less
/// profile with the post fields absent.
///
/// Field declaration order is the CSV column order; the writer derives the
/// header row from it.
#[derive(Debug, Clone, Serialize)]
pub struct FlattenedRow {
    pub profile_id: String,
    pub username: String,
    pub display_name: String,
    pub followers_count: u64,
    pub following_count: u64,
    pub statuses_count: u64,
    pub profile_url: String,
    pub post_id: Option<String>,
    pub post_created_at: Option<String>,
    pub post_url: Option<String>,
    /// Plain-text post content with HTML tags stripped.
    pub post_content: Option<String>,
    pub replies_count: Option<u64>,
    pub reblogs_count: Option<u64>,
    pub favourites_count: Option<u64>,
    pub media_attachments_count: usize,
}

/// Flattens profiles into one row per post, preserving post order. A
/// profile with no posts yields a single row with the post fields empty and
/// `media_attachments_count` zero.
#[must_use]
pub fn flatten(profiles: &[Profile]) -> Vec<FlattenedRow> {
    let mut rows = Vec::new();
    for profile in profiles {
        if profile.posts.is_empty() {
            rows.push(make_row(profile, None));
        } else {
            for post in &profile.posts {
                rows.push(make_row(profile, Some(post)));
            }
        }
    }
    rows
}

fn make_row(profile: &Profile, post: Option<&Post>) -> FlattenedRow {
    FlattenedRow {
        profile_id: profile.id.clone(),
        username: profile.username.clone(),
        display_name: profile.display_name.clone(),
        followers_count: profile.followers_count,
        following_count: profile.following_count,
        statuses_count: profile.statuses_count,
        profile_url: profile.profile_url.clone(),
        post_id: post.map(|p| p.id.clone()),
        post_created_at: post.map(|p| p.created_at.clone()),
        post_url: post.map(|p| p.url.clone()),
        post_content: post.map(|p| strip_tags(&p.content)),
        replies_count: post.map(|p| p.replies_count),
        reblogs_count: post.map(|p| p.reblogs_count),
        favourites_count: post.map(|p| p.favourites_count),
        media_attachments_count: post.map_or(0, |p| p.media_attachments.len()),
    }
}
