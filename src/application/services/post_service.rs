//! Post Service
//!
//! Creates posts and serves the enriched feeds.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use validator::Validate;

use super::post_enrichment::PostEnricher;
use crate::application::dto::CreatePostRequest;
use crate::domain::{
    post_length, EnrichedPost, Post, PostFilter, PostRepository, RateLimiter, UserDirectory,
};
use crate::infrastructure::metrics;
use crate::shared::error::FieldError;
use crate::shared::snowflake::SnowflakeGenerator;
use crate::shared::validation::field_errors;

/// Hard ceiling on feed length, whatever the configuration says.
pub const MAX_FEED_LIMIT: u32 = 100;

/// Post service trait
#[async_trait]
pub trait PostService: Send + Sync {
    /// Get one post with its author
    async fn get_by_id(&self, id: i64) -> Result<EnrichedPost, PostError>;

    /// Get the global feed, newest first
    async fn get_all(&self) -> Result<Vec<EnrichedPost>, PostError>;

    /// Get one author's feed, newest first
    async fn get_posts_by_user_id(&self, user_id: &str) -> Result<Vec<EnrichedPost>, PostError>;

    /// Write a new post for `author_id`
    async fn create(&self, author_id: &str, request: CreatePostRequest) -> Result<Post, PostError>;
}

/// Post service errors
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Rate limited")]
    RateLimited { retry_after: Option<u64> },

    #[error("Post not found")]
    NotFound,

    #[error("Author {author_id} not found for post {post_id}")]
    InternalInconsistency { post_id: i64, author_id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// PostService implementation
pub struct PostServiceImpl<P, D, R>
where
    P: PostRepository,
    D: UserDirectory,
    R: RateLimiter,
{
    post_repo: Arc<P>,
    enricher: PostEnricher<D>,
    rate_limiter: Arc<R>,
    id_generator: Arc<SnowflakeGenerator>,
    feed_limit: u32,
}

impl<P, D, R> PostServiceImpl<P, D, R>
where
    P: PostRepository,
    D: UserDirectory,
    R: RateLimiter,
{
    pub fn new(
        post_repo: Arc<P>,
        directory: Arc<D>,
        rate_limiter: Arc<R>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            post_repo,
            enricher: PostEnricher::new(directory),
            rate_limiter,
            id_generator,
            feed_limit: MAX_FEED_LIMIT,
        }
    }

    /// Shorten feeds. Values above [`MAX_FEED_LIMIT`] are clamped, zero is
    /// treated as one.
    pub fn with_feed_limit(mut self, feed_limit: u32) -> Self {
        self.feed_limit = feed_limit.clamp(1, MAX_FEED_LIMIT);
        self
    }

    async fn feed(&self, filter: PostFilter) -> Result<Vec<EnrichedPost>, PostError> {
        let posts = self
            .post_repo
            .find_recent(&filter, self.feed_limit)
            .await
            .map_err(|e| PostError::Internal(e.to_string()))?;

        self.enricher.enrich(posts).await
    }
}

#[async_trait]
impl<P, D, R> PostService for PostServiceImpl<P, D, R>
where
    P: PostRepository + 'static,
    D: UserDirectory + 'static,
    R: RateLimiter + 'static,
{
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<EnrichedPost, PostError> {
        let post = self
            .post_repo
            .find_by_id(id)
            .await
            .map_err(|e| PostError::Internal(e.to_string()))?
            .ok_or(PostError::NotFound)?;

        let mut enriched = self.enricher.enrich(vec![post]).await?;
        enriched.pop().ok_or(PostError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<EnrichedPost>, PostError> {
        self.feed(PostFilter::All).await
    }

    #[instrument(skip(self))]
    async fn get_posts_by_user_id(&self, user_id: &str) -> Result<Vec<EnrichedPost>, PostError> {
        self.feed(PostFilter::Author(user_id.to_string())).await
    }

    #[instrument(skip(self, request), fields(content_len = post_length(&request.content)))]
    async fn create(&self, author_id: &str, request: CreatePostRequest) -> Result<Post, PostError> {
        if let Err(errors) = request.validate() {
            metrics::record_post_rejected("validation");
            return Err(PostError::Validation(field_errors(&errors)));
        }

        if author_id.trim().is_empty() {
            return Err(PostError::Unauthenticated);
        }

        let decision = self
            .rate_limiter
            .limit(author_id)
            .await
            .map_err(|e| PostError::Internal(e.to_string()))?;

        if !decision.allowed {
            warn!(retry_after = ?decision.retry_after, "Post rate limit exceeded");
            metrics::record_post_rejected("rate_limited");
            return Err(PostError::RateLimited {
                retry_after: decision.retry_after,
            });
        }

        let id = self.id_generator.generate();
        let post = Post {
            id,
            author_id: author_id.to_string(),
            content: request.content,
            created_at: self.id_generator.created_at(id),
        };

        let created = self
            .post_repo
            .create(&post)
            .await
            .map_err(|e| PostError::Internal(e.to_string()))?;

        metrics::record_post_created();
        debug!(post_id = created.id, remaining = decision.remaining, "Post created");

        Ok(created)
    }
}
