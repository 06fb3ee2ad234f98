//! Request DTOs
//!
//! Data structures for API request bodies.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::{post_length, MAX_POST_LENGTH};
use crate::shared::validation::validate_emoji_only;

/// Create post request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(custom(function = "validate_post_content"))]
    pub content: String,
}

impl CreatePostRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Length first, then the emoji rule. Only one error is reported per post.
fn validate_post_content(content: &str) -> Result<(), ValidationError> {
    let length = post_length(content);
    if length == 0 || length > MAX_POST_LENGTH {
        let mut error = ValidationError::new("length");
        error.message = Some(Cow::Owned(format!(
            "Post must be between 1 and {} characters",
            MAX_POST_LENGTH
        )));
        return Err(error);
    }
    validate_emoji_only(content)
}
