//! Wraps teloxide::Bot and implements [`tonhub_core::Bot`]. Production code sends messages via
//! Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use tonhub_core::{Bot as CoreBot, BotError, ButtonAction, Chat, InlineButton, OutgoingReply, Result};

/// Thin wrapper around teloxide::Bot that implements tonhub-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_reply(&self, chat: &Chat, reply: &OutgoingReply) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        let request = match inline_keyboard(reply) {
            Some(markup) => request.reply_markup(markup),
            None => request,
        };
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}

/// Builds the inline keyboard for a reply, one button per row. `None` when the reply has no buttons,
/// so the message is sent without any reply markup.
pub fn inline_keyboard(reply: &OutgoingReply) -> Option<InlineKeyboardMarkup> {
    if !reply.has_markup() {
        return None;
    }
    let rows = reply.buttons.iter().map(|b| vec![to_inline_button(b)]);
    Some(InlineKeyboardMarkup::new(rows))
}

fn to_inline_button(button: &InlineButton) -> InlineKeyboardButton {
    match &button.action {
        ButtonAction::OpenUrl(url) => InlineKeyboardButton::url(button.label.clone(), url.clone()),
        ButtonAction::LaunchMiniApp(url) => {
            InlineKeyboardButton::web_app(button.label.clone(), WebAppInfo { url: url.clone() })
        }
    }
}
