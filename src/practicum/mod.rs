//! Practicum API client module.
//!
//! Provides the HTTPS client used to fetch homework statuses from the
//! review service.

mod client;

pub use client::{ApiError, PracticumClient};
