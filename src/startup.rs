//! Application Startup
//!
//! Wires adapters into services and builds the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{
    PostService, PostServiceImpl, ProfileService, ProfileServiceImpl,
};
use crate::config::{CorsSettings, Settings};
use crate::domain::IdentityProvider;
use crate::infrastructure::health::{HealthProbe, PgProbe, RedisProbe};
use crate::infrastructure::identity::JwtIdentityProvider;
use crate::infrastructure::rate_limit::{RateLimitConfig, RedisRateLimiter};
use crate::infrastructure::repositories::{PgPostRepository, PgUserDirectory};
use crate::infrastructure::{database, redis_conn};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};
use crate::shared::snowflake::SnowflakeGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostService>,
    pub profiles: Arc<dyn ProfileService>,
    pub identity: Arc<dyn IdentityProvider>,
    pub probes: Arc<Vec<Arc<dyn HealthProbe>>>,
}

/// Router with the full middleware stack
pub fn build_router(state: AppState, cors_settings: &CorsSettings) -> Router {
    logging::with_request_tracing(routes::create_router(state))
        .layer(cors::create_cors_layer(cors_settings))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let db = database::connect(&settings.database).await?;

        let redis = redis_conn::connect(&settings.redis)
            .await
            .context("Failed to connect to Redis")?;

        let id_generator = Arc::new(SnowflakeGenerator::with_epoch(
            settings.snowflake.epoch,
            settings.snowflake.machine_id as u64,
            0,
        ));

        let post_repo = Arc::new(PgPostRepository::new(db.clone()));
        let directory = Arc::new(PgUserDirectory::new(db.clone()));
        let rate_limiter = Arc::new(RedisRateLimiter::new(
            redis.clone(),
            RateLimitConfig::from(&settings.rate_limit),
        ));

        let posts = PostServiceImpl::new(post_repo, directory.clone(), rate_limiter, id_generator)
            .with_feed_limit(settings.posts.feed_limit);

        let probes: Vec<Arc<dyn HealthProbe>> =
            vec![Arc::new(PgProbe(db)), Arc::new(RedisProbe(redis))];

        let state = AppState {
            posts: Arc::new(posts),
            profiles: Arc::new(ProfileServiceImpl::new(directory)),
            identity: Arc::new(JwtIdentityProvider::from_settings(&settings.auth)),
            probes: Arc::new(probes),
        };

        let router = build_router(state, &settings.cors);

        let listener = TcpListener::bind(settings.server_addr())
            .await
            .with_context(|| format!("Failed to bind {}", settings.server_addr()))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
