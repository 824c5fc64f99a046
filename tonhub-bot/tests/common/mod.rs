//! Shared helpers for tonhub-bot integration tests.

#![allow(dead_code)]

pub mod log_capture;
pub mod mock_bot;
