//! # tonhub-telegram
//!
//! Telegram layer: adapters from teloxide types, [`tonhub_core::Bot`] implementation with inline
//! keyboards, the supported [`Command`] set and the dispatcher runner.
//! Handles only Telegram connectivity and routing; reply content lives in the [`tonhub_core::CommandHandler`].

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{inline_keyboard, TelegramBotAdapter};
pub use runner::{dispatch_command, run_dispatcher, Command};
