//! Process-local sliding window rate limiter.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::time::Instant;

use super::RateLimitConfig;
use crate::domain::{RateLimitDecision, RateLimiter};
use crate::shared::error::AppError;

/// Sliding-log limiter kept in memory.
///
/// Only correct for a single process. Each key's log is mutated under its
/// map shard lock, so trim, count and record happen as one step. Uses the
/// tokio clock, which tests can pause and advance.
///
/// Keys whose whole log has expired are dropped every [`SWEEP_EVERY`] calls.
#[derive(Default)]
pub struct InMemoryRateLimiter {
    config: RateLimitConfig,
    log: DashMap<String, VecDeque<Instant>>,
    calls: AtomicU64,
}

/// Calls between sweeps of idle keys
const SWEEP_EVERY: u64 = 256;

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            log: DashMap::new(),
            calls: AtomicU64::new(0),
        }
    }

    fn window(&self) -> Duration {
        Duration::from_secs(self.config.window_seconds)
    }

    /// Drop keys with no attempt inside the window. Must not be called while
    /// holding a map entry.
    fn sweep(&self, now: Instant) {
        let window = self.window();
        self.log.retain(|_, entries| {
            entries
                .back()
                .is_some_and(|&at| now.duration_since(at) < window)
        });
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn limit(&self, key: &str) -> Result<RateLimitDecision, AppError> {
        let now = Instant::now();
        let window = self.window();
        let capacity = self.config.requests_per_window as usize;

        if self.calls.fetch_add(1, Ordering::Relaxed) % SWEEP_EVERY == SWEEP_EVERY - 1 {
            self.sweep(now);
        }

        let mut entries = self.log.entry(self.config.key(key)).or_default();
        while entries
            .front()
            .is_some_and(|&at| now.duration_since(at) >= window)
        {
            entries.pop_front();
        }

        if entries.len() < capacity {
            entries.push_back(now);
            let remaining = (capacity - entries.len()) as u32;
            return Ok(RateLimitDecision::allow(remaining));
        }

        let retry_after = entries
            .front()
            .map(|&oldest| (window.saturating_sub(now.duration_since(oldest))).as_secs_f64().ceil() as u64);
        Ok(RateLimitDecision::deny(retry_after))
    }
}
