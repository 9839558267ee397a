//! Polling loop module.
//!
//! Orchestrates the fetch → validate → format → notify cycle on a fixed
//! timer and owns the deduplication state between cycles.

mod runner;
mod state;

pub use runner::{Poller, PollerMessage};
pub use state::NotificationState;
