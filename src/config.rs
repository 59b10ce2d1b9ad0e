//! Configuration management for the contact assistant.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the working directory. Every setting has a default, so an
//! empty environment is a valid configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default location of the address book file.
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Largest accepted upcoming-birthdays window.
const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address book file (default: `addressbook.json`)
    pub data_file: PathBuf,

    /// Days ahead covered by the `birthdays` command (default: 7).
    /// The empty-result reply names the window, e.g. "in the next 14 days".
    pub birthday_window_days: u32,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_DATA_FILE`: Path of the address book file
    /// - `ASSISTANT_BIRTHDAY_WINDOW_DAYS`: Upcoming-birthdays window (0-365, default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which the prompt owns
        let _ = dotenvy::dotenv();

        let data_file = match env::var("ASSISTANT_DATA_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ASSISTANT_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let birthday_window_days =
            Self::parse_env_u32("ASSISTANT_BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;

        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
