//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code
//! sends replies via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup};

use crate::core::{Bot as CoreBot, BotError, Chat, ReplyKeyboard, Result};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Core keyboard rows → Telegram reply keyboard.
fn keyboard_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    KeyboardMarkup::new(
        keyboard
            .rows
            .iter()
            .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>()),
    )
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard_markup(keyboard))
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}
