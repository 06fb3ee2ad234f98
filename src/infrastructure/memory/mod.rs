//! In-Memory Adapters
//!
//! Process-local implementations of the post store and user directory with
//! the same contracts as the PostgreSQL ones. Used by tests and by the
//! router test harness.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{AuthorProfile, Post, PostFilter, PostRepository, UserDirectory};
use crate::shared::error::AppError;

/// Post store backed by a vector.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts.
    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        Ok(self.posts.read().iter().find(|p| p.id == id).cloned())
    }

    async fn find_recent(&self, filter: &PostFilter, limit: u32) -> Result<Vec<Post>, AppError> {
        let mut matching: Vec<Post> = self
            .posts
            .read()
            .iter()
            .filter(|p| match filter {
                PostFilter::All => true,
                PostFilter::Author(author_id) => &p.author_id == author_id,
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        matching.truncate(limit.max(1) as usize);
        Ok(matching)
    }

    async fn create(&self, post: &Post) -> Result<Post, AppError> {
        let mut posts = self.posts.write();
        if posts.iter().any(|p| p.id == post.id) {
            return Err(AppError::Internal(format!("duplicate post id {}", post.id)));
        }
        posts.push(post.clone());
        Ok(post.clone())
    }
}

/// User directory backed by a map, counting batch lookups.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    profiles: RwLock<HashMap<String, AuthorProfile>>,
    batch_calls: AtomicUsize,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory pre-populated with `profiles`.
    pub fn with_profiles(profiles: impl IntoIterator<Item = AuthorProfile>) -> Self {
        let directory = Self::new();
        for profile in profiles {
            directory.insert(profile);
        }
        directory
    }

    pub fn insert(&self, profile: AuthorProfile) {
        self.profiles.write().insert(profile.id.clone(), profile);
    }

    /// How many times `get_profiles` has been called.
    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get_profiles(&self, ids: &[String]) -> Result<HashMap<String, AuthorProfile>, AppError> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        let profiles = self.profiles.read();
        Ok(ids
            .iter()
            .filter_map(|id| profiles.get(id).map(|p| (id.clone(), p.clone())))
            .collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<AuthorProfile>, AppError> {
        Ok(self
            .profiles
            .read()
            .values()
            .find(|p| p.username == username)
            .cloned())
    }
}
