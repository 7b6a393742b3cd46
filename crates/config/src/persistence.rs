//! Configuration file reading and writing.
//!
//! This module handles locating the user configuration directory, loading
//! configuration from files and saving configuration back to files.
//!
//! # File Formats
//!
//! Files are read with a JSON5 parser, so both JSON5 (comments, trailing
//! commas, unquoted keys) and plain JSON are accepted. Files are always
//! written as pretty-printed JSON, which is valid JSON5.
//!
//! # File Locations
//!
//! Everything the dashboard persists lives under one directory:
//!
//! - `~/.config/dashboard/config.json5`: the configuration record
//! - `~/.config/dashboard/log.txt`: the diagnostic log

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// User config directory name.
const USER_CONFIG_DIR: &str = "dashboard";

/// User config file name.
const USER_CONFIG_FILE_NAME: &str = "config.json5";

/// Log file name.
const LOG_FILE_NAME: &str = "log.txt";

/// Returns the user configuration directory.
///
/// This is typically `~/.config/dashboard/` on Unix systems.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use dashboard_config::persistence::user_config_dir;
///
/// let dir = user_config_dir().unwrap();
/// println!("User config dir: {}", dir.display());
/// ```
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path.
///
/// This is typically `~/.config/dashboard/config.json5`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_CONFIG_FILE_NAME))
}

/// Returns the path of the diagnostic log file.
///
/// This is typically `~/.config/dashboard/log.txt`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(LOG_FILE_NAME))
}

/// Reads and parses a configuration file.
///
/// Supports both JSON5 and JSON formats.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content cannot be parsed
///
/// # Examples
///
/// ```no_run
/// use dashboard_config::persistence::read_config_file;
/// use dashboard_config::Config;
///
/// # fn main() -> dashboard_config::Result<()> {
/// let config: Config = read_config_file("config.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file, creating parent directories.
///
/// The configuration is written as pretty-printed JSON, since serde_json5
/// has no serializer.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
/// - The configuration cannot be serialized
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
