//! Snowflake ID Generator
//!
//! Time-ordered 64-bit identifiers for posts. Layout, high to low bits:
//! 41 bits of milliseconds since the configured epoch, 5 bits machine id,
//! 5 bits node id, 12 bits sequence.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Default epoch (2023-01-01T00:00:00.000Z)
pub const DEFAULT_EPOCH: u64 = 1672531200000;

/// Largest machine or node id that fits the 5-bit fields
pub const MAX_WORKER_ID: u64 = 0x1F;

const SEQUENCE_MASK: u64 = 0xFFF;

struct State {
    last_timestamp: u64,
    sequence: u64,
}

/// Snowflake ID generator
pub struct SnowflakeGenerator {
    epoch: u64,
    machine_id: u64,
    node_id: u64,
    state: Mutex<State>,
}

impl SnowflakeGenerator {
    /// Create a new snowflake generator using the default epoch
    pub fn new(machine_id: u64, node_id: u64) -> Self {
        Self::with_epoch(DEFAULT_EPOCH, machine_id, node_id)
    }

    /// Create a generator counting from a custom epoch (milliseconds)
    pub fn with_epoch(epoch: u64, machine_id: u64, node_id: u64) -> Self {
        Self {
            epoch,
            machine_id: machine_id & MAX_WORKER_ID,
            node_id: node_id & MAX_WORKER_ID,
            state: Mutex::new(State {
                last_timestamp: 0,
                sequence: 0,
            }),
        }
    }

    /// Generate a new snowflake ID. Strictly increasing per generator.
    pub fn generate(&self) -> i64 {
        let mut state = self.state.lock();
        let mut timestamp = current_timestamp().max(state.last_timestamp);

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond; borrow the next one.
                timestamp += 1;
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        let id = (timestamp.saturating_sub(self.epoch) << 22)
            | (self.machine_id << 17)
            | (self.node_id << 12)
            | state.sequence;

        id as i64
    }

    /// Extract the creation timestamp (Unix milliseconds) from an ID
    pub fn extract_timestamp(&self, snowflake: i64) -> u64 {
        ((snowflake as u64) >> 22) + self.epoch
    }

    /// Creation time encoded in an ID, so a row's timestamp never
    /// disagrees with its id ordering.
    pub fn created_at(&self, snowflake: i64) -> DateTime<Utc> {
        i64::try_from(self.extract_timestamp(snowflake))
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_else(Utc::now)
    }
}

/// Current Unix time in milliseconds
pub fn current_timestamp() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
