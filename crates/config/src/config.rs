//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which holds every
//! setting of the dashboard: the weather location, the command that turns
//! an article URL into plain text, and the deadline for each fetch.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, Result};
use crate::persistence::{default_user_config_path, read_config_file, write_config_file};

/// Location used when none is configured.
pub const DEFAULT_WEATHER_LOCATION: &str = "Paris";

/// Default fetch deadline in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Minimum fetch deadline in seconds.
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;

/// Maximum fetch deadline in seconds.
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 120;

/// Environment variable overriding [`Config::weather_location`].
pub const ENV_WEATHER_LOCATION: &str = "DASHBOARD_WEATHER_LOCATION";

/// Environment variable overriding [`Config::fetch_timeout_secs`].
pub const ENV_FETCH_TIMEOUT: &str = "DASHBOARD_FETCH_TIMEOUT";

/// The configuration record of the dashboard.
///
/// # Examples
///
/// ```
/// use dashboard_config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.weather_location, "Paris");
/// assert_eq!(config.reader_command, vec!["lynx", "-dump"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Location passed to the weather service.
    #[serde(default = "default_weather_location")]
    pub weather_location: String,

    /// Program and leading arguments used to render an article page as
    /// plain text. The article URL is appended as the last argument.
    #[serde(default = "default_reader_command")]
    pub reader_command: Vec<String>,

    /// Deadline for a single fetch, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_weather_location() -> String {
    DEFAULT_WEATHER_LOCATION.to_string()
}

fn default_reader_command() -> Vec<String> {
    vec!["lynx".to_string(), "-dump".to_string()]
}

const fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_location: default_weather_location(),
            reader_command: default_reader_command(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads the user configuration, creating it with defaults if absent.
    ///
    /// The file lives at `~/.config/dashboard/config.json5`. Environment
    /// overrides are applied afterwards and the result is validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, the
    /// file cannot be read, parsed or created, or validation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dashboard_config::Config;
    ///
    /// # fn example() -> dashboard_config::Result<()> {
    /// let config = Config::load_or_create()?;
    /// println!("Weather for {}", config.weather_location);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_or_create() -> Result<Self> {
        let path = default_user_config_path()?;
        let mut config = Self::load_or_create_at(&path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, writing the defaults there first if
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or created, or
    /// if the loaded values are invalid.
    pub fn load_or_create_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            debug!(path = %path.display(), "Loading configuration");
            return Self::load_from(path);
        }

        info!(path = %path.display(), "Creating default configuration");
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// values are invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dashboard_config::Config;
    ///
    /// # fn example() -> dashboard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies `DASHBOARD_*` environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if `DASHBOARD_FETCH_TIMEOUT` is not a number.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`, keyed by environment
    /// variable name. Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout override is not a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_config::{Config, ENV_WEATHER_LOCATION};
    ///
    /// let mut config = Config::default();
    /// config
    ///     .apply_overrides(|key| (key == ENV_WEATHER_LOCATION).then(|| "Tokyo".to_string()))
    ///     .unwrap();
    /// assert_eq!(config.weather_location, "Tokyo");
    /// ```
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(location) = lookup(ENV_WEATHER_LOCATION).filter(|v| !v.trim().is_empty()) {
            debug!(%location, "Weather location overridden from environment");
            self.weather_location = location.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_FETCH_TIMEOUT).filter(|v| !v.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidFetchTimeout {
                    reason: format!("{ENV_FETCH_TIMEOUT}={raw:?} is not a number: {e}"),
                })?;
            debug!(secs, "Fetch timeout overridden from environment");
            self.fetch_timeout_secs = secs;
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the weather location is blank, the reader
    /// command is empty, or the fetch timeout is outside
    /// [`MIN_FETCH_TIMEOUT_SECS`]..=[`MAX_FETCH_TIMEOUT_SECS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.fetch_timeout_secs = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.weather_location.trim().is_empty() {
            return Err(ConfigError::EmptyWeatherLocation);
        }

        if self
            .reader_command
            .first()
            .is_none_or(|program| program.trim().is_empty())
        {
            return Err(ConfigError::EmptyReaderCommand);
        }

        if !(MIN_FETCH_TIMEOUT_SECS..=MAX_FETCH_TIMEOUT_SECS).contains(&self.fetch_timeout_secs) {
            return Err(ConfigError::InvalidFetchTimeout {
                reason: format!(
                    "{}s is outside {MIN_FETCH_TIMEOUT_SECS}..={MAX_FETCH_TIMEOUT_SECS}s",
                    self.fetch_timeout_secs
                ),
            });
        }

        Ok(())
    }

    /// Returns the fetch deadline as a [`Duration`].
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
