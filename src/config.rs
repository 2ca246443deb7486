//! Configuration management for the contact manager.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::view::ViewMode;
use std::env;

/// Configuration for the contact manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// View mode used when the session starts (default: grid)
    pub default_view: ViewMode,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DEFAULT_VIEW`: `grid` or `list` (default: grid)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::Other(format!("Failed to load .env file: {}", e)));
            }
        }

        let default_view = match env::var("CONTACTS_DEFAULT_VIEW") {
            Ok(val) => val.parse::<ViewMode>().map_err(|_| ConfigError::InvalidValue {
                var: "CONTACTS_DEFAULT_VIEW".to_string(),
                reason: format!("Must be 'grid' or 'list', got: {}", val),
            })?,
            Err(_) => ViewMode::default(),
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) if !val.trim().is_empty() => val.trim().to_string(),
            _ => "error".to_string(),
        };

        Ok(Config {
            default_view,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_view: ViewMode::Grid,
            log_level: "error".to_string(),
        }
    }
}
