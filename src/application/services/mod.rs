//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **PostService**: post creation and the enriched feeds
//! - **PostEnricher**: batched author lookup for a page of posts
//! - **ProfileService**: public profile lookup by username

pub mod post_enrichment;
pub mod post_service;
pub mod profile_service;

pub use post_enrichment::PostEnricher;
pub use post_service::{PostError, PostService, PostServiceImpl, MAX_FEED_LIMIT};
pub use profile_service::{ProfileError, ProfileService, ProfileServiceImpl};
