//! HTTPS client for the Practicum homework statuses endpoint.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::Config;

/// Errors that can occur while talking to the Practicum API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Ошибка сервера. Код ответа API: {0}")]
    Status(StatusCode),

    #[error("Сбой соединения с API: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the homework statuses endpoint.
pub struct PracticumClient {
    /// Shared HTTP client.
    http: reqwest::Client,

    /// Endpoint URL for homework statuses.
    endpoint: String,

    /// OAuth token sent in the `Authorization` header.
    token: String,
}

impl PracticumClient {
    /// Creates a client from the application configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        }
    }

    /// Fetches homework statuses changed since the given cursor.
    ///
    /// The cursor is the `current_date` value echoed back from the
    /// previous response. The decoded body is returned as-is; shape
    /// validation happens in the core pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any non-200 response and
    /// [`ApiError::Transport`] for connection or decoding failures.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, ApiError> {
        debug!("Запрос статусов домашних работ с from_date={}", from_date);

        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Ошибка сервера. Код ответа API: {}", status);
            return Err(ApiError::Status(status));
        }

        Ok(response.json::<Value>().await?)
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
