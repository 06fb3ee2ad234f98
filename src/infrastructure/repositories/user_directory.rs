//! User Directory Implementation
//!
//! Reads the public profile projection kept in the `users` table.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{AuthorProfile, UserDirectory};
use crate::shared::error::AppError;

/// PostgreSQL-backed user directory.
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: String,
    username: String,
    profile_image_url: String,
}

impl From<ProfileRow> for AuthorProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            profile_image_url: row.profile_image_url,
        }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    /// One round trip for the whole batch.
    async fn get_profiles(&self, ids: &[String]) -> Result<HashMap<String, AuthorProfile>, AppError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, username, profile_image_url
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.id.clone(), AuthorProfile::from(row)))
            .collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<AuthorProfile>, AppError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, username, profile_image_url
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthorProfile::from))
    }
}
