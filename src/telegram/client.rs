//! Telegram Bot API client for sending chat messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while sending a Telegram message.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("Telegram отклонил сообщение: {0}")]
    Rejected(String),

    #[error("Сбой соединения с Telegram: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Request body for the `sendMessage` method.
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Reply envelope the Bot API wraps every response in.
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Thin Bot API client bound to a single bot token.
pub struct TelegramBot {
    /// Shared HTTP client.
    http: reqwest::Client,

    /// URL of the `sendMessage` method for this bot.
    send_message_url: String,
}

impl TelegramBot {
    /// Creates a client for the given bot token.
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            send_message_url: format!("https://api.telegram.org/bot{token}/sendMessage"),
        }
    }

    /// Sends a text message to the given chat.
    ///
    /// # Errors
    ///
    /// Returns [`TelegramError::Rejected`] when the Bot API answers with
    /// `ok: false` and [`TelegramError::Transport`] for connection or
    /// decoding failures.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        debug!("Отправка сообщения в чат {}", chat_id);

        let reply = self
            .http
            .post(&self.send_message_url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await?
            .json::<ApiReply>()
            .await?;

        if !reply.ok {
            return Err(TelegramError::Rejected(
                reply
                    .description
                    .unwrap_or_else(|| "нет описания".to_owned()),
            ));
        }

        info!("Бот отправил сообщение: {}", text);
        Ok(())
    }
}

impl std::fmt::Debug for TelegramBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramBot").finish_non_exhaustive()
    }
}
