//! `/start` responder: greets the sender and offers the channel and mini app buttons.

use std::sync::Arc;

use async_trait::async_trait;
use tonhub_core::{
    Bot, BotError, CommandHandler, HandlerError, IncomingEvent, InlineButton, OutgoingReply,
    Result,
};
use tracing::{error, info, instrument, warn};

use crate::config::BotConfig;

pub const START_COMMAND: &str = "start";

pub const WELCOME_TITLE: &str = "Welcome to Tonhub";
pub const MINI_APP_INTRO: &str = "Stay connected, explore powerful features, and unlock new possibilities all in one place ☯:";
pub const COMMAND_HELP: &str = "Available commands:\n/start - Show this welcome message";

pub const CHANNEL_BUTTON_LABEL: &str = "Subscribe to Tonhub Channel";
pub const MINI_APP_BUTTON_LABEL: &str = "🚀 Open Mini App";

/// Sent instead of the welcome when composing or sending it fails.
pub const START_FALLBACK: &str = "Sorry, something went wrong. Please try again.";
/// Sent by the global error hook when a target chat is known.
pub const DISPATCH_FALLBACK: &str = "Sorry, an error occurred. Please try again.";

/// Builds the welcome reply for a `/start` event.
///
/// The channel button, when configured, always comes first. With a mini app the text ends with
/// its introduction and the launch button follows; without one it ends with the command help.
pub fn compose_welcome(
    event: &IncomingEvent,
    config: &BotConfig,
) -> std::result::Result<OutgoingReply, HandlerError> {
    if event.command != START_COMMAND {
        return Err(HandlerError::UnsupportedCommand(event.command.clone()));
    }
    let name = event
        .sender_display_name()
        .ok_or(HandlerError::MissingSenderName)?;

    let mut reply = OutgoingReply::text(format!("Hello {} 👋\n\n{}", name, WELCOME_TITLE));

    if let Some(url) = &config.channel_url {
        reply = reply.with_button(InlineButton::link(CHANNEL_BUTTON_LABEL, url.clone()));
    }

    match &config.mini_app_url {
        Some(url) => {
            reply.text.push_str("\n\n");
            reply.text.push_str(MINI_APP_INTRO);
            reply = reply.with_button(InlineButton::mini_app(MINI_APP_BUTTON_LABEL, url.clone()));
        }
        None => {
            reply.text.push_str("\n\n");
            reply.text.push_str(COMMAND_HELP);
        }
    }

    Ok(reply)
}

/// Welcome reply for `event`, or the plain fallback text when it cannot be composed.
pub fn handle(event: &IncomingEvent, config: &BotConfig) -> OutgoingReply {
    compose_welcome(event, config).unwrap_or_else(|e| fallback_reply(event, &e))
}

fn fallback_reply(event: &IncomingEvent, error: &HandlerError) -> OutgoingReply {
    error!(
        error = %error,
        user_id = event.user_id(),
        chat_id = event.chat.id,
        "Error in start command"
    );
    OutgoingReply::text(START_FALLBACK)
}

/// [`CommandHandler`] for the bot. Stateless apart from the shared config.
pub struct CommandResponder {
    config: Arc<BotConfig>,
}

impl CommandResponder {
    pub fn new(config: Arc<BotConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CommandHandler for CommandResponder {
    /// Sends the welcome reply; on failure sends [`START_FALLBACK`] to the same chat.
    /// Returns an error only when the fallback cannot be delivered either.
    #[instrument(skip_all, fields(user_id = event.user_id(), chat_id = event.chat.id))]
    async fn start(&self, bot: &dyn Bot, event: &IncomingEvent) -> Result<()> {
        let (reply, welcomed) = match compose_welcome(event, &self.config) {
            Ok(reply) => (reply, true),
            Err(e) => (fallback_reply(event, &e), false),
        };

        match bot.reply_to(event, &reply).await {
            Ok(()) if welcomed => {
                info!(
                    user = event.sender_display_name().unwrap_or_default(),
                    buttons = reply.buttons.len(),
                    "Start command processed"
                );
                Ok(())
            }
            Ok(()) => {
                warn!("Start command answered with fallback");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to send start reply");
                bot.send_message(&event.chat, START_FALLBACK).await
            }
        }
    }

    async fn on_error(&self, bot: &dyn Bot, event: Option<&IncomingEvent>, error: &BotError) {
        error!(event = ?event, error = %error, "Update caused error");

        let Some(event) = event else {
            return;
        };
        if let Err(e) = bot.send_message(&event.chat, DISPATCH_FALLBACK).await {
            warn!(error = %e, chat_id = event.chat.id, "Failed to send error notice");
        }
    }
}
