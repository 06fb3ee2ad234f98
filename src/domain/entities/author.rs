//! Author profile projection and the user directory contract.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Public profile fields of a user, as exposed to clients.
///
/// This is a read-through projection of the identity provider's user
/// record. Nothing beyond these three fields leaves the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Identity issued by the identity provider
    pub id: String,

    /// Unique handle shown as `@username`
    pub username: String,

    /// Avatar URL
    pub profile_image_url: String,
}

/// Batched lookup of public user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch profiles for a set of identities in one call.
    ///
    /// The returned map may be missing entries or be in any order; callers
    /// decide what a missing identity means.
    async fn get_profiles(&self, ids: &[String]) -> Result<HashMap<String, AuthorProfile>, AppError>;

    /// Find a profile by its username.
    async fn find_by_username(&self, username: &str) -> Result<Option<AuthorProfile>, AppError>;
}
