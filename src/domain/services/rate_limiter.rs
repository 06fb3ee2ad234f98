//! Rate limiter contract.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// Outcome of one consume attempt against a rate limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the attempt was admitted (and counted)
    pub allowed: bool,

    /// Attempts left in the current window after this one
    pub remaining: u32,

    /// Seconds until the oldest counted attempt leaves the window, when denied
    pub retry_after: Option<u64>,
}

impl RateLimitDecision {
    pub fn allow(remaining: u32) -> Self {
        Self {
            allowed: true,
            remaining,
            retry_after: None,
        }
    }

    pub fn deny(retry_after: Option<u64>) -> Self {
        Self {
            allowed: false,
            remaining: 0,
            retry_after,
        }
    }
}

/// Sliding-window admission control keyed by an arbitrary string.
///
/// `limit` must consume and compare in one atomic step: concurrent callers
/// with the same key never see more admissions than the configured capacity.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Consume one slot for `key` if one is available.
    async fn limit(&self, key: &str) -> Result<RateLimitDecision, AppError>;
}
