//! # tonhub-core
//!
//! Core types and traits for the Tonhub bot: [`Bot`], [`CommandHandler`], inbound events, outgoing
//! replies with inline buttons, and tracing initialization. Transport-agnostic; used by
//! tonhub-telegram and tonhub-bot.

pub mod bot;
pub mod error;
pub mod handler;
pub mod logger;
pub mod reply;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use handler::CommandHandler;
pub use logger::{init_tracing, open_log_file};
pub use reply::{ButtonAction, InlineButton, OutgoingReply};
pub use reqwest::Url;
pub use types::{Chat, IncomingEvent, ToCoreEvent, ToCoreUser, User};
