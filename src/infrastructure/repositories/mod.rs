//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! - **PgPostRepository** - Post storage and newest-first feeds
//! - **PgUserDirectory** - Batched public profile lookups
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use chirp::infrastructure::repositories::{PgPostRepository, PgUserDirectory};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let posts = PgPostRepository::new(pool.clone());
//!     let users = PgUserDirectory::new(pool);
//! }
//! ```

pub mod post_repository;
pub mod user_directory;

pub use post_repository::PgPostRepository;
pub use user_directory::PgUserDirectory;
