//! Post Repository Implementation
//!
//! PostgreSQL implementation of post storage with newest-first feed queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Post, PostFilter, PostRepository};
use crate::shared::error::AppError;

/// PostgreSQL post repository implementation.
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Creates a new PgPostRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for post queries.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i64,
    author_id: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            author_id: self.author_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, author_id, content, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    /// Most recent posts first. The ID tiebreak keeps the order stable when
    /// two posts share a timestamp, since snowflake IDs grow with insertion.
    async fn find_recent(&self, filter: &PostFilter, limit: u32) -> Result<Vec<Post>, AppError> {
        let limit = i64::from(limit.max(1));

        let rows = match filter {
            PostFilter::All => {
                sqlx::query_as::<_, PostRow>(
                    r#"
                    SELECT id, author_id, content, created_at
                    FROM posts
                    ORDER BY created_at DESC, id DESC
                    LIMIT $1
                    "#,
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            PostFilter::Author(author_id) => {
                sqlx::query_as::<_, PostRow>(
                    r#"
                    SELECT id, author_id, content, created_at
                    FROM posts
                    WHERE author_id = $1
                    ORDER BY created_at DESC, id DESC
                    LIMIT $2
                    "#,
                )
                .bind(author_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    /// The ID is pre-generated by the application layer; the insert is a
    /// single statement so a post is either fully written or absent.
    async fn create(&self, post: &Post) -> Result<Post, AppError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, author_id, content, created_at
            "#,
        )
        .bind(post.id)
        .bind(&post.author_id)
        .bind(&post.content)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }
}
