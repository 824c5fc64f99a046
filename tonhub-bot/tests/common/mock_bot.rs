//! Recording implementation of [`tonhub_core::Bot`] for integration tests.
//!
//! Captures every sent message or reply so tests can assert on what reached the chat without
//! hitting Telegram. Sends can be made to fail to exercise the fallback paths.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tonhub_core::{Bot, BotError, Chat, OutgoingReply, Result};

/// One recorded delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub reply: OutgoingReply,
}

/// Bot that records deliveries. The first `fail_sends` calls fail with a transport error and are
/// not recorded.
#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<SentRecord>>,
    fail_sends: AtomicUsize,
}

impl RecordingBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bot whose first `n` sends fail.
    pub fn failing(n: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: AtomicUsize::new(n),
        }
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    fn deliver(&self, chat: &Chat, reply: OutgoingReply) -> Result<()> {
        let should_fail = self
            .fail_sends
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(BotError::Bot("simulated send failure".to_string()));
        }
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            reply,
        });
        Ok(())
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.deliver(chat, OutgoingReply::text(text))
    }

    async fn send_reply(&self, chat: &Chat, reply: &OutgoingReply) -> Result<()> {
        self.deliver(chat, reply.clone())
    }
}
