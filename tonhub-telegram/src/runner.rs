//! Dispatcher runner: filters command messages, converts them to [`IncomingEvent`] and hands them
//! to the [`CommandHandler`]. Handler failures go to the handler's global error hook.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tonhub_core::{Bot as CoreBot, CommandHandler, IncomingEvent, ToCoreEvent};
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;

/// Supported commands:
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Show the welcome message
    Start(String),
}

impl Command {
    /// Command name without the leading slash.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start(_) => "start",
        }
    }

    /// Text after the command, e.g. a deep link parameter; empty when none was given.
    pub fn payload(&self) -> &str {
        match self {
            Command::Start(payload) => payload,
        }
    }
}

/// Starts long polling with the given teloxide Bot and handler; returns after Ctrl-C.
/// Calls get_me() first to log the bot username.
#[instrument(skip(bot, handler))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler: Arc<dyn CommandHandler>) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                info!(username = %username, "Bot username resolved before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; continuing"),
    }

    let core_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    let schema = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(on_command);

    info!("Dispatcher started, long polling for updates");

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![core_bot, handler])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Ignoring update without a supported command");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_command(
    msg: Message,
    cmd: Command,
    bot: Arc<dyn CoreBot>,
    handler: Arc<dyn CommandHandler>,
) -> ResponseResult<()> {
    let event = TelegramMessageWrapper(&msg).to_event(cmd.name(), cmd.payload());
    info!(
        user_id = event.user_id(),
        chat_id = event.chat.id,
        command = %event.command,
        args = %event.args,
        "Received command"
    );
    dispatch_command(bot.as_ref(), handler.as_ref(), &event, cmd).await;
    Ok(())
}

/// Routes one command to its handler method; an error from the handler is passed to
/// [`CommandHandler::on_error`] together with the event.
pub async fn dispatch_command(
    bot: &dyn CoreBot,
    handler: &dyn CommandHandler,
    event: &IncomingEvent,
    cmd: Command,
) {
    let result = match cmd {
        Command::Start(_payload) => handler.start(bot, event).await,
    };
    if let Err(e) = result {
        error!(error = %e, user_id = event.user_id(), chat_id = event.chat.id, "Command handler failed");
        handler.on_error(bot, Some(event), &e).await;
    }
}
