use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tonhub_core::CommandHandler;
use tonhub_telegram::run_dispatcher;
use tracing::{error, info, instrument};

use crate::config::{BotConfig, MISSING_TOKEN_HELP};
use crate::responder::CommandResponder;

/// Decides whether the bot may start. Without a token, logs the error, writes the setup
/// instructions to `console` and returns `None`; no Telegram client is created.
pub fn startup<F, W>(lookup: F, console: &mut W) -> Option<BotConfig>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    match BotConfig::from_lookup(lookup) {
        Ok(config) => Some(config),
        Err(e) => {
            error!(error = %e, "TELEGRAM_BOT_TOKEN environment variable not found");
            if let Err(io_err) = writeln!(console, "{}", MISSING_TOKEN_HELP) {
                error!(error = %io_err, "Failed to print setup instructions");
            }
            None
        }
    }
}

/// Creates the teloxide client, pointed at the custom Bot API server when one is configured.
pub fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match &config.telegram_api_url {
        Some(url) => bot.set_api_url(url.clone()),
        None => bot,
    }
}

/// Main entry after logging is up: builds the responder and long-polls until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    info!(
        config = ?config,
        mini_app = config.mini_app_url.is_some(),
        channel = config.channel_url.is_some(),
        "Starting Tonhub bot"
    );

    let bot = build_teloxide_bot(&config);
    let responder: Arc<dyn CommandHandler> = Arc::new(CommandResponder::new(Arc::new(config)));

    run_dispatcher(bot, responder).await
}
