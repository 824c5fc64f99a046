//! Command handler contract invoked by the transport's dispatcher.

use async_trait::async_trait;

use crate::bot::Bot;
use crate::error::{BotError, Result};
use crate::types::IncomingEvent;

/// One method per supported command plus a global error hook.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handles `/start`. Failures the handler cannot recover from itself are returned and routed
    /// to [`CommandHandler::on_error`] by the dispatcher.
    async fn start(&self, bot: &dyn Bot, event: &IncomingEvent) -> Result<()>;

    /// Called for failures surfaced during dispatch. `event` is `None` when no target chat is
    /// known. Best effort: must not fail.
    async fn on_error(&self, bot: &dyn Bot, event: Option<&IncomingEvent>, error: &BotError);
}
