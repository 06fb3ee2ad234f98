//! Post Enrichment
//!
//! Joins stored posts with their authors' public profiles.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::error;

use super::post_service::PostError;
use crate::domain::{EnrichedPost, Post, UserDirectory};

/// Attaches author profiles to posts with one directory call per batch.
pub struct PostEnricher<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
}

impl<D> Clone for PostEnricher<D>
where
    D: UserDirectory,
{
    fn clone(&self) -> Self {
        Self {
            directory: self.directory.clone(),
        }
    }
}

impl<D> PostEnricher<D>
where
    D: UserDirectory,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Enrich `posts`, keeping their order.
    ///
    /// The directory is asked once for the distinct author set, never per
    /// post. A post whose author is missing from the answer fails the whole
    /// batch: dropping it would silently shorten feeds.
    pub async fn enrich(&self, posts: Vec<Post>) -> Result<Vec<EnrichedPost>, PostError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let author_ids: Vec<String> = posts
            .iter()
            .filter(|p| seen.insert(p.author_id.as_str()))
            .map(|p| p.author_id.clone())
            .collect();

        let authors = self
            .directory
            .get_profiles(&author_ids)
            .await
            .map_err(|e| PostError::Internal(e.to_string()))?;

        posts
            .into_iter()
            .map(|post| {
                // Match on the id field too; a directory that answers with
                // the wrong profile is as broken as one that answers nothing.
                match authors.get(&post.author_id) {
                    Some(author) if author.id == post.author_id => Ok(EnrichedPost {
                        author: author.clone(),
                        post,
                    }),
                    _ => {
                        error!(
                            post_id = post.id,
                            author_id = %post.author_id,
                            "Author not found for post"
                        );
                        Err(PostError::InternalInconsistency {
                            post_id: post.id,
                            author_id: post.author_id,
                        })
                    }
                }
            })
            .collect()
    }
}
