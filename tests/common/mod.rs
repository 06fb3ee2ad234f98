//! Common Test Utilities
//!
//! Router test harness over the in-memory adapters, plus token helpers.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;

use chirp::application::services::{PostServiceImpl, ProfileServiceImpl};
use chirp::config::CorsSettings;
use chirp::domain::AuthorProfile;
use chirp::infrastructure::health::HealthProbe;
use chirp::infrastructure::identity::{Claims, JwtIdentityProvider};
use chirp::infrastructure::memory::{InMemoryPostRepository, InMemoryUserDirectory};
use chirp::infrastructure::rate_limit::{InMemoryRateLimiter, RateLimitConfig};
use chirp::shared::snowflake::SnowflakeGenerator;
use chirp::startup::{build_router, AppState};

pub const TEST_SECRET: &str = "integration-test-secret-integration-test";

/// Probe with a fixed answer
pub struct StaticProbe {
    pub name: &'static str,
    pub critical: bool,
    pub up: bool,
}

#[async_trait]
impl HealthProbe for StaticProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    fn critical(&self) -> bool {
        self.critical
    }

    async fn ping(&self) -> Result<(), String> {
        if self.up {
            Ok(())
        } else {
            Err(format!("{} unreachable", self.name))
        }
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
    pub posts: Arc<InMemoryPostRepository>,
    pub directory: Arc<InMemoryUserDirectory>,
}

impl TestApp {
    /// App with two known users, `alice` (user_1) and `bob` (user_2), and
    /// healthy dependencies.
    pub fn new() -> Self {
        Self::with_probes(vec![
            Arc::new(StaticProbe {
                name: "database",
                critical: true,
                up: true,
            }) as Arc<dyn HealthProbe>,
            Arc::new(StaticProbe {
                name: "redis",
                critical: false,
                up: true,
            }) as Arc<dyn HealthProbe>,
        ])
    }

    pub fn with_probes(probes: Vec<Arc<dyn HealthProbe>>) -> Self {
        let posts = Arc::new(InMemoryPostRepository::new());
        let directory = Arc::new(InMemoryUserDirectory::with_profiles([
            profile("user_1", "alice"),
            profile("user_2", "bob"),
        ]));
        let limiter = Arc::new(InMemoryRateLimiter::new(RateLimitConfig::default()));

        let post_service = PostServiceImpl::new(
            posts.clone(),
            directory.clone(),
            limiter,
            Arc::new(SnowflakeGenerator::new(1, 1)),
        );

        let state = AppState {
            posts: Arc::new(post_service),
            profiles: Arc::new(ProfileServiceImpl::new(directory.clone())),
            identity: Arc::new(JwtIdentityProvider::new(TEST_SECRET, None)),
            probes: Arc::new(probes),
        };

        let router = build_router(
            state,
            &CorsSettings {
                allowed_origins: vec![],
            },
        );

        Self {
            router,
            posts,
            directory,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post_json_auth(&self, uri: &str, body: &str, token: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", token))
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Post `content` as `user_id`
    pub async fn create_post(&self, user_id: &str, content: &str) -> Response {
        let body = serde_json::json!({ "content": content }).to_string();
        self.post_json_auth("/api/v1/posts", &body, &token_for(user_id))
            .await
    }
}

pub fn profile(id: &str, username: &str) -> AuthorProfile {
    AuthorProfile {
        id: id.into(),
        username: username.into(),
        profile_image_url: format!("https://img.example/{username}.png"),
    }
}

/// Signed session token for `user_id`, valid for an hour
pub fn token_for(user_id: &str) -> String {
    signed_token(user_id, 3600, TEST_SECRET)
}

pub fn signed_token(user_id: &str, expires_in: i64, secret: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.into(),
        exp: now + expires_in,
        iat: now,
        iss: None,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// Read a response body as JSON
pub async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn assert_status(response: &Response, status: StatusCode) {
    assert_eq!(response.status(), status, "unexpected status");
}
