//! Post Handlers

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CreatePostRequest, EnrichedPostResponse, PostResponse};
use crate::application::services::PostError;
use crate::domain::EnrichedPost;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<PostError> for AppError {
    fn from(error: PostError) -> Self {
        match error {
            PostError::Validation(fields) => AppError::Validation(fields),
            PostError::Unauthenticated => AppError::Unauthorized("Not signed in".into()),
            PostError::RateLimited { retry_after } => AppError::RateLimited { retry_after },
            PostError::NotFound => AppError::NotFound("Post not found".into()),
            e @ PostError::InternalInconsistency { .. } => AppError::Internal(e.to_string()),
            PostError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

fn to_responses(posts: Vec<EnrichedPost>) -> Json<Vec<EnrichedPostResponse>> {
    Json(posts.into_iter().map(EnrichedPostResponse::from).collect())
}

/// Global feed
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrichedPostResponse>>, AppError> {
    let posts = state.posts.get_all().await?;
    Ok(to_responses(posts))
}

/// Single post. Ids that are not snowflakes cannot name a post.
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<EnrichedPostResponse>, AppError> {
    let post_id: i64 = post_id
        .parse()
        .map_err(|_| AppError::NotFound("Post not found".into()))?;

    let post = state.posts.get_by_id(post_id).await?;
    Ok(Json(post.into()))
}

/// One author's feed
pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<EnrichedPostResponse>>, AppError> {
    let posts = state.posts.get_posts_by_user_id(&user_id).await?;
    Ok(to_responses(posts))
}

/// Create post as the signed-in user
pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let post = state.posts.create(&auth.user_id, body).await?;
    Ok((StatusCode::CREATED, Json(post.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_inconsistency_maps_to_internal_error() {
        let error = AppError::from(PostError::InternalInconsistency {
            post_id: 7,
            author_id: "ghost".into(),
        });
        assert!(matches!(error, AppError::Internal(_)));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_rate_limited_keeps_retry_after() {
        let error = AppError::from(PostError::RateLimited {
            retry_after: Some(42),
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()["retry-after"], "42");
    }

    #[test]
    fn test_unauthenticated_maps_to_401() {
        let response = AppError::from(PostError::Unauthenticated).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
