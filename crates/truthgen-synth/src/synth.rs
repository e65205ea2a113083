//! Deterministic profile and post synthesis.
//!
//! All numeric and textual attributes are derived from a stable hash of the
//! canonical username via modulo arithmetic into fixed ranges; only the
//! timestamps depend on the moment of generation.

use chrono::{DateTime, Duration, Utc};
use truthgen_core::time::iso_utc;
use truthgen_core::{MediaAttachment, Post, Profile};

use crate::extract::extract_username;
use crate::normalize::IdentifierKind;
use crate::seed::stable_seed;

/// Post ids are ten decimal digits, so post seeds live in `[0, 1e10)`.
const POST_SEED_MODULUS: u64 = 10_000_000_000;

/// Host for synthetic media asset URLs.
const MEDIA_ASSET_HOST: &str = "https://static-assets.truthsocial.local";

/// Host for synthetic avatar and header URLs.
const CDN_HOST: &str = "https://cdn.truthsocial.local";

/// Builds deterministic profiles from canonical identifiers.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    base_url: String,
    posts_per_profile: u32,
}

impl Synthesizer {
    #[must_use]
    pub fn new(base_url: impl Into<String>, posts_per_profile: u32) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            posts_per_profile,
        }
    }

    /// Builds a profile with embedded posts for a canonical identifier.
    ///
    /// Building the same identifier twice yields identical attributes apart
    /// from `scraped_at` and the post `created_at` values.
    #[must_use]
    pub fn build_profile(&self, identifier: &str, kind: IdentifierKind) -> Profile {
        let (username, profile_url) = match kind {
            IdentifierKind::Url => (extract_username(identifier), identifier.to_string()),
            IdentifierKind::Tag => {
                let tag = identifier.trim_start_matches('#');
                (
                    format!("{tag}_stream"),
                    format!("{}/tags/{tag}", self.base_url),
                )
            }
            IdentifierKind::Username => (
                identifier.to_string(),
                format!("{}/@{identifier}", self.base_url),
            ),
        };

        let seed = stable_seed(&username);
        let posts = self.generate_posts(&username, seed);
        tracing::debug!(%username, ?kind, seed, "built profile payload");

        Profile {
            id: format!("profile-{username}"),
            display_name: display_name(&username),
            followers_count: 1_000 + seed % 9_000_000,
            following_count: 10 + seed % 10_000,
            statuses_count: 100 + seed % 50_000,
            avatar_url: format!("{CDN_HOST}/avatars/{username}.jpg"),
            header_url: format!("{CDN_HOST}/headers/{username}.jpg"),
            profile_url,
            scraped_at: iso_utc(Utc::now()),
            posts,
            username,
        }
    }

    /// Generates the deterministic post sequence for `username`.
    ///
    /// Takes the seed explicitly so boundary values are directly testable
    /// (seed 0 hits every engagement floor).
    #[must_use]
    pub fn generate_posts(&self, username: &str, seed: u64) -> Vec<Post> {
        let now = Utc::now();
        (0..self.posts_per_profile)
            .map(|index| self.build_post(username, seed, index, now))
            .collect()
    }

    fn build_post(&self, username: &str, seed: u64, index: u32, now: DateTime<Utc>) -> Post {
        let post_seed =
            (seed % POST_SEED_MODULUS + u64::from(index) * 97) % POST_SEED_MODULUS;
        let post_id = format!("{post_seed:010}");

        // Post 0 is the most recent; each later index moves three hours back.
        let created_at = iso_utc(now - Duration::hours(i64::from(index) * 3));

        let engagement = (seed / (u64::from(index) + 5)) % 1_000;

        let content = format!(
            "<p>Automated update from <strong>@{username}</strong> \
             with post id <code>{post_id}</code>.</p>"
        );

        let media_attachments = vec![MediaAttachment {
            id: format!("media-{post_id}"),
            media_type: "image".to_string(),
            url: format!("{MEDIA_ASSET_HOST}/{username}/{post_id}.jpg"),
        }];

        Post {
            url: format!("{}/@{username}/{post_id}", self.base_url),
            id: post_id,
            created_at,
            content,
            replies_count: 20 + engagement % 500,
            reblogs_count: 40 + (engagement * 2) % 1_500,
            favourites_count: 100 + (engagement * 3) % 5_000,
            media_attachments,
        }
    }
}

/// Derives a display name from a username: `.` and `_` become spaces and
/// each word is title-cased. Falls back to the raw username when the result
/// is empty.
fn display_name(username: &str) -> String {
    let spaced = username.replace(['.', '_'], " ");
    let mut titled = String::with_capacity(spaced.len());
    let mut prev_alphabetic = false;
    for ch in spaced.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            titled.push(ch);
            prev_alphabetic = false;
        }
    }

    if titled.is_empty() {
        username.to_string()
    } else {
        titled
    }
}
