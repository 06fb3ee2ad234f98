//! Response DTOs
//!
//! Data structures for API response bodies. Field names are camelCase and
//! snowflake IDs are strings, which is what the web client reads.

use serde::{Deserialize, Serialize};

use crate::domain::{AuthorProfile, EnrichedPost, Post};

/// Post response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id,
            content: post.content,
            created_at: post.created_at.to_rfc3339(),
        }
    }
}

/// Public author profile response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
    pub profile_image_url: String,
}

impl From<AuthorProfile> for AuthorResponse {
    fn from(profile: AuthorProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            profile_image_url: profile.profile_image_url,
        }
    }
}

/// A post with its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedPostResponse {
    pub post: PostResponse,
    pub author: AuthorResponse,
}

impl From<EnrichedPost> for EnrichedPostResponse {
    fn from(enriched: EnrichedPost) -> Self {
        Self {
            post: enriched.post.into(),
            author: enriched.author.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_enriched_post_json_shape() {
        let enriched = EnrichedPost {
            post: Post {
                id: 1234567890123,
                author_id: "user_1".into(),
                content: "🎉".into(),
                created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            },
            author: AuthorProfile {
                id: "user_1".into(),
                username: "alice".into(),
                profile_image_url: "https://img.example/alice.png".into(),
            },
        };

        let value = serde_json::to_value(EnrichedPostResponse::from(enriched)).unwrap();
        assert_eq!(
            value,
            json!({
                "post": {
                    "id": "1234567890123",
                    "authorId": "user_1",
                    "content": "🎉",
                    "createdAt": "2024-05-01T12:00:00+00:00"
                },
                "author": {
                    "id": "user_1",
                    "username": "alice",
                    "profileImageUrl": "https://img.example/alice.png"
                }
            })
        );
    }
}
