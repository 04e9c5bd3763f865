//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Prompt printed before every command.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Length of the upcoming-birthday window in days.
pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt shown before reading a command (default: "Enter a command: ")
    pub prompt: String,

    /// Number of days, starting today, scanned by the `birthdays` command (default: 7)
    pub upcoming_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `ASSISTANT_UPCOMING_DAYS`: Birthday window in days, 1-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is not an error
        let _ = dotenvy::dotenv();

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        let upcoming_days = Self::parse_env_u32("ASSISTANT_UPCOMING_DAYS", DEFAULT_UPCOMING_DAYS)?;
        if !(1..=366).contains(&upcoming_days) {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_UPCOMING_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            prompt,
            upcoming_days,
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
            prompt: DEFAULT_PROMPT.to_string(),
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            log_level: "error".to_string(),
        }
    }
}
