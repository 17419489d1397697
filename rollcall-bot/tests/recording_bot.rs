//! A `Bot` fake that records every outbound message so tests can assert on
//! replies without a Telegram connection.

use async_trait::async_trait;
use rollcall_bot::{Bot, Chat, ReplyKeyboard, Result};
use tokio::sync::Mutex;

/// One captured outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

/// Records sends instead of performing them.
#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<SentMessage>>,
}

impl RecordingBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, in order.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().await.push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: None,
        });
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.sent.lock().await.push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: Some(keyboard.clone()),
        });
        Ok(())
    }
}
