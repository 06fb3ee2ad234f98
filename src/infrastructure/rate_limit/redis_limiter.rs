//! Redis-based distributed sliding window rate limiter.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use tracing::{debug, instrument};

use super::RateLimitConfig;
use crate::domain::{RateLimitDecision, RateLimiter};
use crate::shared::error::AppError;

/// Trim, count, and conditionally record in one script so concurrent
/// requests for the same key cannot both take the last slot.
///
/// Returns `{allowed, count, retry_after_ms}`.
const SLIDING_WINDOW_SCRIPT: &str = r#"
local key = KEYS[1]
local now_ms = tonumber(ARGV[1])
local window_ms = tonumber(ARGV[2])
local max_requests = tonumber(ARGV[3])
local member = ARGV[4]

redis.call('ZREMRANGEBYSCORE', key, '-inf', now_ms - window_ms)
local current_count = redis.call('ZCARD', key)

if current_count < max_requests then
    redis.call('ZADD', key, now_ms, member)
    redis.call('PEXPIRE', key, window_ms + 1000)
    return {1, current_count + 1, 0}
end

local oldest = redis.call('ZRANGE', key, 0, 0, 'WITHSCORES')
local retry_after = 0
if oldest and #oldest >= 2 then
    retry_after = tonumber(oldest[2]) + window_ms - now_ms
end
return {0, current_count, retry_after}
"#;

/// Sliding-log rate limiter stored in Redis sorted sets.
///
/// Members are unique per attempt, scores are Unix milliseconds. Works
/// across any number of server instances sharing the Redis.
#[derive(Clone)]
pub struct RedisRateLimiter {
    redis: ConnectionManager,
    config: RateLimitConfig,
    script: redis::Script,
}

impl RedisRateLimiter {
    pub fn new(redis: ConnectionManager, config: RateLimitConfig) -> Self {
        Self {
            redis,
            config,
            script: redis::Script::new(SLIDING_WINDOW_SCRIPT),
        }
    }
}

#[async_trait]
impl RateLimiter for RedisRateLimiter {
    /// Redis failures propagate; the limiter never admits blindly.
    #[instrument(skip(self))]
    async fn limit(&self, key: &str) -> Result<RateLimitDecision, AppError> {
        let redis_key = self.config.key(key);
        let now_ms = chrono::Utc::now().timestamp_millis();
        let window_ms = (self.config.window_seconds * 1000) as i64;
        let member = format!("{}:{}", now_ms, uuid::Uuid::new_v4());

        let mut conn = self.redis.clone();
        let result: Vec<i64> = self
            .script
            .key(&redis_key)
            .arg(now_ms)
            .arg(window_ms)
            .arg(i64::from(self.config.requests_per_window))
            .arg(member)
            .invoke_async(&mut conn)
            .await?;

        let decision = decision_from_reply(&result, self.config.requests_per_window);
        debug!(allowed = decision.allowed, remaining = decision.remaining, "Rate limit evaluated");
        Ok(decision)
    }
}

/// Map the script reply `{allowed, count, retry_after_ms}` onto a decision.
/// A denial always asks the caller to wait at least one whole second.
fn decision_from_reply(reply: &[i64], capacity: u32) -> RateLimitDecision {
    let allowed = reply.first().copied() == Some(1);
    let count = u32::try_from(reply.get(1).copied().unwrap_or(0).max(0)).unwrap_or(u32::MAX);

    if allowed {
        RateLimitDecision::allow(capacity.saturating_sub(count))
    } else {
        let retry_ms = reply.get(2).copied().unwrap_or(0).max(0) as u64;
        RateLimitDecision::deny(Some(retry_ms.div_ceil(1000).max(1)))
    }
}
