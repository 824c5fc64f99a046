//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; tonhub-telegram implements it via teloxide and tests substitute
//! recording doubles.

use crate::error::Result;
use crate::reply::OutgoingReply;
use crate::types::{Chat, IncomingEvent};
use async_trait::async_trait;

/// Sends messages to chats. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply with its inline buttons. No keyboard is attached when the reply has none.
    async fn send_reply(&self, chat: &Chat, reply: &OutgoingReply) -> Result<()>;

    /// Sends a reply to the chat the event came from.
    async fn reply_to(&self, event: &IncomingEvent, reply: &OutgoingReply) -> Result<()> {
        self.send_reply(&event.chat, reply).await
    }
}
