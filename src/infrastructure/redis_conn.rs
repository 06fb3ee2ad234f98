//! Redis Connection
//!
//! Redis holds only rate limiter state; losing it resets windows but loses
//! no posts.

use redis::aio::ConnectionManager;
use redis::Client;
use tracing::{info, instrument};

use crate::config::RedisSettings;

/// Open a reconnecting Redis connection and check it answers.
#[instrument(skip(settings))]
pub async fn connect(settings: &RedisSettings) -> Result<ConnectionManager, redis::RedisError> {
    let client = Client::open(settings.url.as_str())?;
    let mut manager = ConnectionManager::new(client).await?;

    redis::cmd("PING").query_async::<String>(&mut manager).await?;
    info!("Redis connection established");
    Ok(manager)
}
