//! Configuration management for the address book assistant.
//!
//! Every setting has a default, so running without any environment behaves
//! the same as running with the defaults spelled out. A `.env` file in the
//! working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::services::DEFAULT_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default snapshot file name.
pub const DEFAULT_STORAGE_FILE: &str = "addressbook.pkl";

/// Largest accepted reminder window, one (leap) year.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the address book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the snapshot file (default: `addressbook.pkl`)
    pub storage_path: PathBuf,

    /// Length of the `birthdays` window in days (default: 7)
    pub birthday_window_days: u32,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Snapshot file path (default: `addressbook.pkl`)
    /// - `BIRTHDAY_WINDOW_DAYS`: Reminder window, 1-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let storage_path = match env::var("ADDRESS_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_STORAGE_FILE),
        };

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days == 0 || birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 1 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            storage_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_FILE),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
