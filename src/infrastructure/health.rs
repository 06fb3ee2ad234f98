//! Dependency Probes
//!
//! Connectivity checks used by the readiness endpoint.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use sqlx::PgPool;

/// A backing service the readiness probe pings.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Short name reported in the readiness response.
    fn name(&self) -> &'static str;

    /// Whether a failure makes the whole server unready.
    fn critical(&self) -> bool;

    /// Round trip to the service.
    async fn ping(&self) -> Result<(), String>;
}

/// PostgreSQL probe; the post store is critical.
pub struct PgProbe(pub PgPool);

#[async_trait]
impl HealthProbe for PgProbe {
    fn name(&self) -> &'static str {
        "database"
    }

    fn critical(&self) -> bool {
        true
    }

    async fn ping(&self) -> Result<(), String> {
        sqlx::query("SELECT 1")
            .execute(&self.0)
            .await
            .map(|_| ())
            .map_err(|e| format!("Database connection failed: {}", e))
    }
}

/// Redis probe. Reads keep working without Redis, so it only degrades.
pub struct RedisProbe(pub ConnectionManager);

#[async_trait]
impl HealthProbe for RedisProbe {
    fn name(&self) -> &'static str {
        "redis"
    }

    fn critical(&self) -> bool {
        false
    }

    async fn ping(&self) -> Result<(), String> {
        let mut conn = self.0.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| format!("Redis connection failed: {}", e))
    }
}
