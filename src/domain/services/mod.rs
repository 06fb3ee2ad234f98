//! # Domain Services
//!
//! Contracts for the external services the post pipeline consumes. They
//! carry no implementation here; concrete adapters live in the
//! infrastructure layer.
//!
//! ## Services
//!
//! - **IdentityProvider**: resolves who is calling
//! - **RateLimiter**: sliding-window admission per identity

mod identity;
mod rate_limiter;

pub use identity::IdentityProvider;
pub use rate_limiter::{RateLimitDecision, RateLimiter};
