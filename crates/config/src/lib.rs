//! Configuration management for the dashboard application.
//!
//! This crate handles loading, validating, and persisting the single
//! configuration record of the dashboard.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct, loading and environment overrides
//! - [`persistence`]: Config file locations, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from the following sources (highest to lowest):
//!
//! 1. Environment variables (`DASHBOARD_*`)
//! 2. User config (`~/.config/dashboard/config.json5`)
//! 3. Built-in defaults
//!
//! When the user config file does not exist it is created with the
//! built-in defaults on first start.
//!
//! # Examples
//!
//! ```no_run
//! use dashboard_config::Config;
//!
//! # fn example() -> dashboard_config::Result<()> {
//! let config = Config::load_or_create()?;
//! println!("Weather for {}", config.weather_location);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{
    Config, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_WEATHER_LOCATION, ENV_FETCH_TIMEOUT,
    ENV_WEATHER_LOCATION, MAX_FETCH_TIMEOUT_SECS, MIN_FETCH_TIMEOUT_SECS,
};
pub use error::{ConfigError, Result};
