//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database repositories (PostgreSQL)
//! - Redis connection and the distributed rate limiter
//! - Bearer token verification against the identity provider
//! - In-memory adapters with the same contracts

pub mod database;
pub mod health;
pub mod identity;
pub mod memory;
pub mod metrics;
pub mod rate_limit;
pub mod redis_conn;
pub mod repositories;
