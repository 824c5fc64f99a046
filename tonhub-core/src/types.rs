//! Core types: user, chat, and the inbound command event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (private, group or channel) identity. Replies always go back to this chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A bot command received from a chat, e.g. `/start` or `/start ref123`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingEvent {
    pub id: String,
    /// Sender; absent for anonymous admins and channel posts.
    pub user: Option<User>,
    pub chat: Chat,
    /// Command name without the leading slash or `@bot` suffix.
    pub command: String,
    /// Text after the command (deep-link payload for `/start`); empty when none.
    pub args: String,
    pub received_at: DateTime<Utc>,
}

impl IncomingEvent {
    /// Name used to greet the sender: the first name as delivered by the platform.
    pub fn sender_display_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.first_name.as_deref())
    }

    /// Sender id, or 0 when the event has no sender.
    pub fn user_id(&self) -> i64 {
        self.user.as_ref().map(|u| u.id).unwrap_or(0)
    }
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message to an [`IncomingEvent`] for an already parsed command.
pub trait ToCoreEvent: Send + Sync {
    fn to_event(&self, command: &str, args: &str) -> IncomingEvent;
}
