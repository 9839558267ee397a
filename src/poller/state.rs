//! Notification deduplication state.

use std::time::{SystemTime, UNIX_EPOCH};

/// Gets current Unix timestamp in seconds.
#[must_use]
pub(crate) fn now_unix() -> i64 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    i64::try_from(secs).unwrap_or_default()
}

/// Last message delivered to the chat.
///
/// The gate compares a candidate against the immediately preceding sent
/// message only, by exact string equality. There is no per-homework
/// history: a status flapping between two values every cycle is reported
/// on every flap.
#[derive(Debug, Default)]
pub struct NotificationState {
    /// Text of the last successfully sent message, empty initially.
    last_sent: String,
}

impl NotificationState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether the candidate differs from the last sent message.
    #[must_use]
    pub fn should_send(&self, candidate: &str) -> bool {
        candidate != self.last_sent
    }

    /// Records a message as sent. Called only after a successful delivery.
    pub fn record(&mut self, message: String) {
        self.last_sent = message;
    }

    /// Returns the last sent message text.
    #[must_use]
    pub fn last_sent(&self) -> &str {
        &self.last_sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_sends_anything() {
        let state = NotificationState::new();
        assert!(state.should_send("первое сообщение"));
    }

    #[test]
    fn test_identical_message_is_suppressed() {
        let mut state = NotificationState::new();
        state.record("статус изменился".to_owned());
        assert!(!state.should_send("статус изменился"));
    }

    #[test]
    fn test_different_message_passes() {
        let mut state = NotificationState::new();
        state.record("первое".to_owned());
        assert!(state.should_send("второе"));
    }

    #[test]
    fn test_alternating_messages_always_pass() {
        // No history beyond the last message: flapping is re-reported.
        let mut state = NotificationState::new();
        for _ in 0..3 {
            assert!(state.should_send("a"));
            state.record("a".to_owned());
            assert!(state.should_send("b"));
            state.record("b".to_owned());
        }
    }

    #[test]
    fn test_empty_candidate_matches_initial_state() {
        let state = NotificationState::new();
        assert!(!state.should_send(""));
    }
}
