//! # Tonhub bot application
//!
//! Loads [`BotConfig`] from the environment, builds the [`CommandResponder`] and runs the Telegram
//! dispatcher from tonhub-telegram.

pub mod config;
pub mod responder;
pub mod runner;

pub use config::{mask_token, BotConfig, MISSING_TOKEN_HELP};
pub use responder::{compose_welcome, handle, CommandResponder};
pub use runner::{build_teloxide_bot, run_bot, startup};
