//! # Domain Layer
//!
//! The domain layer contains the core types of the microblog.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Post, AuthorProfile, EnrichedPost and their data access traits
//! - **services**: contracts for the identity provider and the rate limiter
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository and service traits define the contracts adapters implement

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
