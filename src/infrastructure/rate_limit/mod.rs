//! Rate Limiting
//!
//! Sliding window limiters implementing the domain `RateLimiter` contract:
//!
//! - [`RedisRateLimiter`]: distributed, one Lua script per attempt
//! - [`InMemoryRateLimiter`]: single process, used in tests and local runs
//!
//! Both count only admitted attempts, so a client hammering a closed window
//! does not push its own reopening further out.

mod memory_limiter;
mod redis_limiter;

pub use memory_limiter::InMemoryRateLimiter;
pub use redis_limiter::RedisRateLimiter;

use serde::Deserialize;

use crate::config::RateLimitSettings;

/// Configuration for a sliding window limiter.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Attempts allowed per window
    pub requests_per_window: u32,
    /// Window duration in seconds
    pub window_seconds: u64,
    /// Namespace prepended to every key
    pub key_prefix: String,
}

impl RateLimitConfig {
    /// Full storage key for a caller-supplied key.
    pub fn key(&self, key: &str) -> String {
        format!("{}:{}", self.key_prefix, key)
    }
}

/// Post creation: 3 per rolling minute.
impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::from(&RateLimitSettings::default())
    }
}

impl From<&RateLimitSettings> for RateLimitConfig {
    fn from(settings: &RateLimitSettings) -> Self {
        Self {
            requests_per_window: settings.requests_per_window,
            window_seconds: settings.window_seconds,
            key_prefix: settings.key_prefix.clone(),
        }
    }
}
