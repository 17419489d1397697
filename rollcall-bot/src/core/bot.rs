//! The outbound transport seam: a `Bot` trait handlers send replies through.
//! Production uses the Telegram adapter; tests substitute a recording fake.

use async_trait::async_trait;

use super::error::Result;
use super::types::Chat;

/// A reply keyboard: rows of quick-reply button labels. The transport adapter
/// turns this into its native keyboard structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
}

impl ReplyKeyboard {
    /// One row per inner vector, in order.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// Outbound message primitive. Send failures are reported, never panicked on;
/// the receive loop logs them and moves on.
#[async_trait]
pub trait Bot: Send + Sync {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Like `send_message`, with a reply keyboard attached.
    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()>;
}
