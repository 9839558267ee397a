//! Configuration module for the homework status bot.
//!
//! Handles loading and validation of the secrets and tuning knobs the
//! bot needs: the Practicum API token, the Telegram bot token, and the
//! target chat identifier.

mod settings;

pub use settings::{Config, ConfigError};

/// Default interval between polls of the Practicum API, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Production endpoint for homework statuses.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
