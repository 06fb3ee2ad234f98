//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::shared::snowflake::{current_timestamp, MAX_WORKER_ID};

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Redis configuration (rate limiter store)
    pub redis: RedisSettings,

    /// Bearer token verification settings
    pub auth: AuthSettings,

    /// Post content and feed limits
    pub posts: PostSettings,

    /// Post creation rate limit
    pub rate_limit: RateLimitSettings,

    /// Snowflake ID generator settings
    pub snowflake: SnowflakeSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Log output configuration
    pub telemetry: TelemetrySettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply pending migrations on startup
    pub run_migrations: bool,
}

/// Redis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    /// Redis connection URL
    pub url: String,
}

/// Bearer token verification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Shared HS256 secret used by the identity provider to sign tokens
    pub jwt_secret: String,

    /// Expected `iss` claim, if the provider sets one
    pub issuer: Option<String>,
}

/// Post content and feed limits.
#[derive(Debug, Clone, Deserialize)]
pub struct PostSettings {
    /// Maximum number of posts returned by a feed query
    pub feed_limit: u32,
}

/// Post creation rate limit configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    /// Posts allowed per identity inside one window
    pub requests_per_window: u32,

    /// Sliding window length in seconds
    pub window_seconds: u64,

    /// Namespace for rate limit keys in Redis
    pub key_prefix: String,
}

/// Snowflake ID generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeSettings {
    /// Machine/worker ID (0-31)
    pub machine_id: u16,

    /// Custom epoch timestamp in milliseconds
    pub epoch: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// Emit JSON log lines instead of the human readable format
    pub json: bool,
}

/// Minimum required length for JWT secret (256 bits = 32 bytes)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the JWT secret is too short.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("posts.feed_limit", 100)?
            .set_default("rate_limit.requests_per_window", 3)?
            .set_default("rate_limit.window_seconds", 60)?
            .set_default("rate_limit.key_prefix", "chirp:ratelimit")?
            .set_default("snowflake.machine_id", 1)?
            .set_default("snowflake.epoch", 1672531200000_u64)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            .set_default("telemetry.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option("auth.jwt_secret", std::env::var("JWT_SECRET").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| settings.validate())
    }

    /// Reject configurations the server cannot run safely with.
    fn validate(self) -> Result<Self, ConfigError> {
        if self.auth.jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "JWT secret must be at least {} characters for security. Current length: {}",
                MIN_JWT_SECRET_LENGTH,
                self.auth.jwt_secret.len()
            )));
        }
        if self.rate_limit.requests_per_window == 0 || self.rate_limit.window_seconds == 0 {
            return Err(ConfigError::Message(
                "rate_limit.requests_per_window and rate_limit.window_seconds must be positive"
                    .into(),
            ));
        }
        if self.posts.feed_limit == 0 {
            return Err(ConfigError::Message("posts.feed_limit must be positive".into()));
        }
        if u64::from(self.snowflake.machine_id) > MAX_WORKER_ID {
            return Err(ConfigError::Message(format!(
                "snowflake.machine_id must be between 0 and {}, got {}",
                MAX_WORKER_ID, self.snowflake.machine_id
            )));
        }
        // Ids generated before the epoch all collapse onto the same timestamp.
        if self.snowflake.epoch > current_timestamp() {
            return Err(ConfigError::Message(format!(
                "snowflake.epoch {} is in the future",
                self.snowflake.epoch
            )));
        }
        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for PostSettings {
    fn default() -> Self {
        Self { feed_limit: 100 }
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            requests_per_window: 3,
            window_seconds: 60,
            key_prefix: "chirp:ratelimit".into(),
        }
    }
}
