//! Homework status processing module.
//!
//! Handles validation of raw Practicum API payloads, extraction of
//! homework records, and rendering of status-change notifications.

mod catalog;
mod format;
mod validate;

pub use catalog::{KNOWN_STATUSES, verdict_for};
pub use format::{ParseError, parse_status};
pub use validate::{ValidateError, check_response};
