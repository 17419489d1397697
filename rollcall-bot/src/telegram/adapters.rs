//! Converters from teloxide types to the core message model.

use crate::core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Telegram user → core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram message → core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                // Channel posts and the like carry no sender; id 0 has no
                // username, so membership commands reply "set a username".
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.0.text().unwrap_or("").to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telegram_user(username: Option<&str>) -> teloxide::types::User {
        teloxide::types::User {
            id: teloxide::types::UserId(7),
            is_bot: false,
            first_name: "Bob".to_string(),
            last_name: None,
            username: username.map(str::to_string),
            language_code: None,
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    #[test]
    fn user_wrapper_maps_identity_fields() {
        let user = telegram_user(Some("bob"));
        let core = TelegramUserWrapper(&user).to_core();

        assert_eq!(core.id, 7);
        assert_eq!(core.username.as_deref(), Some("bob"));
        assert_eq!(core.first_name.as_deref(), Some("Bob"));
        assert_eq!(core.last_name, None);
    }

    #[test]
    fn user_wrapper_keeps_missing_username_missing() {
        let user = telegram_user(None);
        let core = TelegramUserWrapper(&user).to_core();

        assert_eq!(core.username, None);
    }
}
