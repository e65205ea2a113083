use serde::{Deserialize, Serialize};

/// A synthesized social profile with its embedded posts, shaped to match the
/// export payload.
///
/// Every field other than the timestamps is derived deterministically from
/// the canonical username, so building the same profile twice yields
/// identical attribute values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Stable identifier, `profile-{username}`.
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub followers_count: u64,
    pub following_count: u64,
    pub statuses_count: u64,
    /// Avatar image URL; exported under the wire key `avatar`.
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    /// Header image URL; exported under the wire key `header`.
    #[serde(rename = "header")]
    pub header_url: String,
    /// Canonical profile page URL; exported under the wire key `url`.
    #[serde(rename = "url")]
    pub profile_url: String,
    /// ISO-8601 UTC timestamp with `Z` suffix, captured at synthesis time.
    pub scraped_at: String,
    pub posts: Vec<Post>,
}

impl Profile {
    /// Returns the number of embedded posts.
    #[must_use]
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if the profile carries at least one post.
    #[must_use]
    pub fn has_posts(&self) -> bool {
        !self.posts.is_empty()
    }
}

/// A single synthesized post owned by its parent [`Profile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Ten-digit zero-padded decimal id.
    pub id: String,
    /// ISO-8601 UTC timestamp with `Z` suffix; strictly older for later
    /// post indices.
    pub created_at: String,
    pub url: String,
    /// HTML-ish snippet; tabular export strips the tags.
    pub content: String,
    pub replies_count: u64,
    pub reblogs_count: u64,
    pub favourites_count: u64,
    pub media_attachments: Vec<MediaAttachment>,
}

/// A media attachment owned by its parent [`Post`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAttachment {
    /// `media-{post_id}`.
    pub id: String,
    /// Attachment kind; exported under the wire key `type`.
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
}
