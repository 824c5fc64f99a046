//! Outgoing reply: text plus an ordered list of inline buttons.

use reqwest::Url;

/// What an inline button does when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Opens the URL outside the bot (browser, or the linked chat for `t.me` links).
    OpenUrl(Url),
    /// Launches the mini app at the URL inside the messaging client.
    LaunchMiniApp(Url),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub action: ButtonAction,
}

impl InlineButton {
    pub fn link(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::OpenUrl(url),
        }
    }

    pub fn mini_app(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::LaunchMiniApp(url),
        }
    }
}

/// Reply handed to the transport. Buttons are laid out one per row, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingReply {
    pub text: String,
    pub buttons: Vec<InlineButton>,
}

impl OutgoingReply {
    /// Plain-text reply without buttons.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: Vec::new(),
        }
    }

    pub fn with_button(mut self, button: InlineButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// Whether the transport must attach a keyboard. Without buttons no markup is sent at all.
    pub fn has_markup(&self) -> bool {
        !self.buttons.is_empty()
    }
}
