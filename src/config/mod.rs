//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chirp::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Posting limited to {} per {}s", settings.rate_limit.requests_per_window, settings.rate_limit.window_seconds);
//! ```

mod settings;

pub use settings::*;
