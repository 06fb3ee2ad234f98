//! Profile Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::AuthorResponse;
use crate::application::services::ProfileError;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Public profile by username. Accepts the `@handle` form the profile page
/// links use.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<AuthorResponse>, AppError> {
    let username = username.strip_prefix('@').unwrap_or(&username);

    let profile = state
        .profiles
        .get_user_by_username(username)
        .await
        .map_err(|e| match e {
            ProfileError::NotFound => AppError::NotFound("User not found".into()),
            ProfileError::Internal(msg) => AppError::Internal(msg),
        })?;

    Ok(Json(profile.into()))
}
