//! # Chirp Library
//!
//! An emoji-only microblog service:
//! - Signed-in users write emoji-only posts of up to 280 UTF-16 units
//! - Posting is rate limited to 3 posts per rolling minute per user
//! - Global, per-author and single-post feeds, each post joined with its
//!   author's public profile
//! - PostgreSQL for posts and profiles, Redis for the rate limiter
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities and the adapter contracts
//! - **Application Layer**: Post and profile services, DTOs
//! - **Infrastructure Layer**: PostgreSQL, Redis, JWT and in-memory adapters
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chirp/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities and traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, Redis and identity implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, snowflake IDs, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
