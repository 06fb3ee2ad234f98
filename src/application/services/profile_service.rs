//! Profile Service
//!
//! Public profile lookup for the profile page.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::domain::{AuthorProfile, UserDirectory};

/// Profile service trait
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Resolve a public profile by username
    async fn get_user_by_username(&self, username: &str) -> Result<AuthorProfile, ProfileError>;
}

/// Profile service errors
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ProfileService implementation
pub struct ProfileServiceImpl<D: UserDirectory> {
    directory: Arc<D>,
}

impl<D: UserDirectory> ProfileServiceImpl<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D: UserDirectory + 'static> ProfileService for ProfileServiceImpl<D> {
    #[instrument(skip(self))]
    async fn get_user_by_username(&self, username: &str) -> Result<AuthorProfile, ProfileError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ProfileError::NotFound);
        }

        self.directory
            .find_by_username(username)
            .await
            .map_err(|e| ProfileError::Internal(e.to_string()))?
            .ok_or(ProfileError::NotFound)
    }
}
