//! Post entity and repository trait.
//!
//! Maps to the `posts` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::author::AuthorProfile;
use crate::shared::error::AppError;

/// Maximum post length, counted in UTF-16 code units.
pub const MAX_POST_LENGTH: usize = 280;

/// Length of post content as counted against [`MAX_POST_LENGTH`]. Emoji
/// outside the Basic Multilingual Plane count twice.
pub fn post_length(content: &str) -> usize {
    content.encode_utf16().count()
}

/// A short emoji-only message.
///
/// Maps to the `posts` table:
/// - id: BIGINT PRIMARY KEY (Snowflake ID)
/// - author_id: TEXT NOT NULL (identity issued by the identity provider)
/// - content: VARCHAR(280) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// Posts are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// Identity of the author
    pub author_id: String,

    /// Emoji content, see [`post_length`]
    pub content: String,

    /// Timestamp when the post was written
    pub created_at: DateTime<Utc>,
}

/// A post joined with its author's public profile.
///
/// Invariant: `author.id == post.author_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedPost {
    pub post: Post,
    pub author: AuthorProfile,
}

/// Which posts a feed query selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    /// Every post (the global feed)
    All,
    /// Posts written by one author
    Author(String),
}

/// Repository trait for Post data access operations.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its Snowflake ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Find the most recent posts matching `filter`.
    ///
    /// Ordered by `created_at` descending, then by ID descending, and never
    /// longer than `limit`.
    async fn find_recent(&self, filter: &PostFilter, limit: u32) -> Result<Vec<Post>, AppError>;

    /// Insert a new post in a single atomic write.
    async fn create(&self, post: &Post) -> Result<Post, AppError>;
}
