//! Homework status poll loop.
//!
//! Each cycle runs to completion before the next one starts:
//! 1. Fetch homework statuses from the Practicum API using the cursor
//! 2. Validate the response shape and extract the homework list
//! 3. Render each record into notification text
//! 4. Push each text through the dedup gate and send survivors
//! 5. Advance the cursor to the response's `current_date`
//!
//! Any cycle-level failure is converted into a user-facing message and
//! pushed through the same gate, then the loop sleeps and continues.
//! Only missing configuration aborts the process, and that happens
//! before this loop starts.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info};

use super::NotificationState;
use super::state::now_unix;
use crate::config::Config;
use crate::practicum::{ApiError, PracticumClient};
use crate::status::{ParseError, ValidateError, check_response, parse_status};
use crate::telegram::TelegramBot;

/// Messages that can be sent to the poller.
#[derive(Debug, Clone)]
pub enum PollerMessage {
    /// Trigger an immediate poll cycle.
    TriggerPoll,
    /// Stop the poller.
    Shutdown,
}

/// A failure that aborts one poll cycle.
#[derive(Debug, Error)]
enum CycleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Homework status poller.
pub struct Poller {
    /// Practicum API client.
    api: PracticumClient,

    /// Telegram bot client.
    bot: TelegramBot,

    /// Chat that receives notifications.
    chat_id: String,

    /// Interval between poll cycles.
    poll_interval: Duration,
}

impl Poller {
    /// Creates a new poller.
    #[must_use]
    pub fn new(api: PracticumClient, bot: TelegramBot, config: &Config) -> Self {
        Self {
            api,
            bot,
            chat_id: config.chat_id.clone(),
            poll_interval: config.poll_interval,
        }
    }

    /// Runs the poll loop until shutdown.
    ///
    /// The cursor and the dedup state live here and are threaded through
    /// each cycle; nothing about them is shared or persisted.
    pub async fn run(&self, mut rx: mpsc::Receiver<PollerMessage>) {
        info!(
            "Опрос статусов домашних работ запущен (интервал {:?})",
            self.poll_interval
        );

        let mut cursor = now_unix();
        let mut state = NotificationState::new();
        let mut timer = interval(self.poll_interval);

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    self.tick(&mut cursor, &mut state).await;
                }
                msg = rx.recv() => {
                    match msg {
                        Some(PollerMessage::TriggerPoll) => {
                            debug!("Получен запрос на внеочередной опрос");
                            self.tick(&mut cursor, &mut state).await;
                        }
                        Some(PollerMessage::Shutdown) | None => {
                            info!("Опрос завершается");
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Single tick: one poll cycle plus uniform failure handling.
    async fn tick(&self, cursor: &mut i64, state: &mut NotificationState) {
        if let Err(err) = self.poll_cycle(cursor, state).await {
            let message = format!("Сбой в работе программы: {err}");
            error!("{}", message);
            self.notify(state, message).await;
        }
    }

    /// One fetch → validate → format → notify pass.
    ///
    /// A record that fails to render aborts the remaining records of the
    /// cycle; records already rendered before it have been sent. The
    /// cursor advances only after a fully successful cycle, so failed
    /// updates are re-fetched next time.
    async fn poll_cycle(
        &self,
        cursor: &mut i64,
        state: &mut NotificationState,
    ) -> Result<(), CycleError> {
        let response = self.api.homework_statuses(*cursor).await?;
        let homeworks = check_response(&response)?;

        if homeworks.is_empty() {
            debug!("В ответе отсутствуют новые статусы");
        }

        for homework in homeworks {
            let message = parse_status(homework)?;
            self.notify(state, message).await;
        }

        // The API echoes the cursor for the next request; keep the old
        // one if the value is not an integer.
        *cursor = response
            .get("current_date")
            .and_then(Value::as_i64)
            .unwrap_or(*cursor);

        Ok(())
    }

    /// Sends a message unless it repeats the last one sent.
    ///
    /// Delivery failures are logged and swallowed: the dedup state is
    /// not updated, so the message is retried when it comes up again.
    async fn notify(&self, state: &mut NotificationState, message: String) {
        if !state.should_send(&message) {
            debug!("Сообщение совпадает с предыдущим, отправка пропущена");
            return;
        }

        match self.bot.send_message(&self.chat_id, &message).await {
            Ok(()) => state.record(message),
            Err(err) => error!("Сбой при отправке сообщения в Telegram: {}", err),
        }
    }
}

impl std::fmt::Debug for Poller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("chat_id", &self.chat_id)
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Runs the pure part of one cycle: validate, format, gate.
    fn cycle_messages(response: &Value, state: &mut NotificationState) -> Vec<String> {
        let mut sent = Vec::new();
        let homeworks = check_response(response).unwrap();
        for homework in homeworks {
            let message = parse_status(homework).unwrap();
            if state.should_send(&message) {
                state.record(message.clone());
                sent.push(message);
            }
        }
        sent
    }

    #[test]
    fn test_repeated_cycle_sends_once() {
        let response = json!({
            "homeworks": [{ "homework_name": "hw1", "status": "approved" }],
            "current_date": 1000,
        });

        let mut state = NotificationState::new();
        let first = cycle_messages(&response, &mut state);
        assert_eq!(first.len(), 1);

        // Second cycle yields the identical text and must be suppressed.
        let second = cycle_messages(&response, &mut state);
        assert!(second.is_empty());
    }

    #[test]
    fn test_status_change_is_reported_again() {
        let mut state = NotificationState::new();

        let reviewing = json!({
            "homeworks": [{ "homework_name": "hw1", "status": "reviewing" }],
            "current_date": 1000,
        });
        assert_eq!(cycle_messages(&reviewing, &mut state).len(), 1);

        let approved = json!({
            "homeworks": [{ "homework_name": "hw1", "status": "approved" }],
            "current_date": 2000,
        });
        assert_eq!(cycle_messages(&approved, &mut state).len(), 1);
    }

    #[test]
    fn test_cycle_error_message_text() {
        let err = CycleError::from(ValidateError::ResponseKeys);
        assert_eq!(
            format!("Сбой в работе программы: {err}"),
            "Сбой в работе программы: ответ API не содержит ожидаемых ключей"
        );
    }

    #[test]
    fn test_cursor_follows_current_date() {
        let response = json!({ "homeworks": [], "current_date": 4242 });
        let cursor = response
            .get("current_date")
            .and_then(Value::as_i64)
            .unwrap_or(0);
        assert_eq!(cursor, 4242);
    }
}
