//! Telegram client wrapper module.
//!
//! Provides a thin Bot API client used to deliver notifications to the
//! configured chat.

mod client;

pub use client::{TelegramBot, TelegramError};
