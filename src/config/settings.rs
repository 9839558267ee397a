//! Application configuration sourced from environment variables.

use std::time::Duration;

use super::{DEFAULT_ENDPOINT, DEFAULT_POLL_INTERVAL_SECS};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .0.join(", "))]
    MissingEnvVars(Vec<&'static str>),

    #[error("Некорректное значение POLL_INTERVAL (ожидалось число секунд)")]
    InvalidPollInterval,
}

/// Runtime configuration for the bot.
///
/// Built once at startup and passed into the poll loop; never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the Practicum homework API.
    pub practicum_token: String,

    /// Telegram Bot API token.
    pub telegram_token: String,

    /// Identifier of the chat that receives notifications.
    pub chat_id: String,

    /// Endpoint for homework statuses.
    pub endpoint: String,

    /// Interval between polls.
    pub poll_interval: Duration,
}

impl Config {
    /// Creates configuration from environment variables.
    ///
    /// Expects `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID`
    /// to be set. All missing variables are collected and reported in a
    /// single error so the operator sees the full list at once.
    /// `PRACTICUM_ENDPOINT` and `POLL_INTERVAL` are optional overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is missing or an
    /// override fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let practicum_token = std::env::var("PRACTICUM_TOKEN").ok();
        let telegram_token = std::env::var("TELEGRAM_TOKEN").ok();
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok();

        let mut missing = Vec::new();
        if practicum_token.as_deref().is_none_or(str::is_empty) {
            missing.push("PRACTICUM_TOKEN");
        }
        if telegram_token.as_deref().is_none_or(str::is_empty) {
            missing.push("TELEGRAM_TOKEN");
        }
        if chat_id.as_deref().is_none_or(str::is_empty) {
            missing.push("TELEGRAM_CHAT_ID");
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnvVars(missing));
        }

        let endpoint = std::env::var("PRACTICUM_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());

        let poll_interval = match std::env::var("POLL_INTERVAL") {
            Ok(raw) => Duration::from_secs(
                raw.parse().map_err(|_| ConfigError::InvalidPollInterval)?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        };

        Ok(Self {
            practicum_token: practicum_token.unwrap_or_default(),
            telegram_token: telegram_token.unwrap_or_default(),
            chat_id: chat_id.unwrap_or_default(),
            endpoint,
            poll_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_vars_are_all_reported() {
        let err = ConfigError::MissingEnvVars(vec![
            "PRACTICUM_TOKEN",
            "TELEGRAM_CHAT_ID",
        ]);
        let message = err.to_string();
        assert!(message.contains("PRACTICUM_TOKEN"));
        assert!(message.contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_default_poll_interval() {
        assert_eq!(DEFAULT_POLL_INTERVAL_SECS, 600);
    }
}
