//! Database Module
//!
//! PostgreSQL pool for the post store and the profile directory.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{info, instrument};

use crate::config::DatabaseSettings;

/// Errors raised while bringing the database up
#[derive(Debug, thiserror::Error)]
pub enum DatabaseSetupError {
    #[error("Failed to connect to PostgreSQL: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect, then apply pending migrations when `run_migrations` is set.
#[instrument(skip(settings), fields(max_connections = settings.max_connections))]
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DatabaseSetupError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout))
        .connect(&settings.url)
        .await?;
    info!("Database connection pool created");

    if settings.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    Ok(pool)
}
