//! # Chirp
//!
//! Emoji-only microblog server.
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Database connection pool and migrations
//! - Redis-backed rate limiter
//! - HTTP server

use anyhow::Result;
use tracing::info;

use chirp::config::Settings;
use chirp::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings come first: they decide the log format
    let settings = Settings::load()?;
    chirp::telemetry::init_tracing(&settings.telemetry);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
