//! # Domain Entities
//!
//! Core domain entities of the microblog.
//!
//! - **Post**: a short emoji-only message, owned by the post store
//! - **AuthorProfile**: public profile fields sourced from the identity provider
//! - **EnrichedPost**: a post joined with its author, ready for display
//!
//! ## Repository Traits
//!
//! `PostRepository` and `UserDirectory` define the data access contracts.
//! They are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod author;
mod post;

pub use author::{AuthorProfile, UserDirectory};
pub use post::{post_length, EnrichedPost, Post, PostFilter, PostRepository, MAX_POST_LENGTH};

#[cfg(test)]
pub use author::MockUserDirectory;
