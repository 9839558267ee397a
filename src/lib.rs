//! Homework Status Bot Library
//!
//! A Telegram bot that tracks homework review statuses on Yandex Practicum.
//!
//! This crate provides the core functionality for:
//! - Validating untrusted API responses and extracting homework records
//! - Mapping review status codes to human-readable verdicts
//! - Deduplicating repeated notifications
//! - Polling the review API and delivering updates to a single chat

pub mod config;
pub mod poller;
pub mod practicum;
pub mod status;
pub mod telegram;
