//! Command handlers: each command is one stateless transaction against the
//! membership store, followed by a templated reply.
//!
//! `add_me`/`remove_me` use check-then-act, so the pair is serialized through
//! an in-process per-chat lock; without it two concurrent `/add_me` messages
//! could both pass the `is_member` check and produce a duplicate entry.

use std::collections::HashMap;
use std::sync::Arc;

use membership_store::MembershipStore;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::commands::{command_token, Command};
use crate::core::{Bot, Message, ReplyKeyboard, Result};

const HELP_TEXT: &str = "I keep this chat's roll call. Opt in with /add_me, \
opt out with /remove_me, and call everyone who is in with /go.";
const NOBODY_READY: &str = "Nobody is ready yet.";
const NO_USERNAME: &str = "You need a Telegram username before I can put you on the list.";

fn joined(username: &str) -> String {
    format!("@{} is on the list!", username)
}

fn already_joined(username: &str) -> String {
    format!("@{}, you are already on the list!", username)
}

fn removed(username: &str) -> String {
    format!("@{} is off the list!", username)
}

fn not_joined(username: &str) -> String {
    format!("@{}, you are not on the list!", username)
}

fn roll_call(mentions: &str) -> String {
    format!("Time to go, {}!", mentions)
}

/// Routes parsed commands to their handlers. Holds the store and the outbound
/// transport as injected dependencies so tests can substitute both.
pub struct CommandHandlers {
    store: Arc<dyn MembershipStore>,
    bot: Arc<dyn Bot>,
    chat_locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl CommandHandlers {
    pub fn new(store: Arc<dyn MembershipStore>, bot: Arc<dyn Bot>) -> Self {
        Self {
            store,
            bot,
            chat_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Handles one inbound message end to end: token extraction, command
    /// resolution, handler invocation. Non-commands and unrecognized commands
    /// get a debug log line and no reply.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    pub async fn dispatch(&self, message: &Message) -> Result<()> {
        let Some(token) = command_token(&message.content) else {
            debug!(user_id = message.user.id, "Ignoring non-command message");
            return Ok(());
        };

        match token.parse::<Command>() {
            Ok(command) => {
                info!(
                    user_id = message.user.id,
                    command = command.as_command(),
                    "Dispatching command"
                );
                self.run(command, message).await
            }
            Err(()) => {
                debug!(
                    user_id = message.user.id,
                    token, "Ignoring unrecognized command"
                );
                Ok(())
            }
        }
    }

    async fn run(&self, command: Command, message: &Message) -> Result<()> {
        match command {
            Command::Start => self.handle_start(message).await,
            Command::AddMe => self.handle_add_me(message).await,
            Command::RemoveMe => self.handle_remove_me(message).await,
            Command::Go => self.handle_go(message).await,
        }
    }

    /// `/start`: help text plus a quick-reply keyboard with the other three
    /// commands. No precondition, no mutation.
    async fn handle_start(&self, message: &Message) -> Result<()> {
        let keyboard = ReplyKeyboard::new(vec![vec![
            Command::AddMe.as_command().to_string(),
            Command::RemoveMe.as_command().to_string(),
            Command::Go.as_command().to_string(),
        ]]);
        self.bot
            .send_message_with_keyboard(&message.chat, HELP_TEXT, &keyboard)
            .await
    }

    /// `/add_me`: appends the sender to the chat's list unless they are
    /// already on it.
    async fn handle_add_me(&self, message: &Message) -> Result<()> {
        let chat = &message.chat;
        let Some(username) = message.user.username.as_deref() else {
            return self.bot.send_message(chat, NO_USERNAME).await;
        };

        let lock = self.chat_lock(chat.id).await;
        let _guard = lock.lock().await;

        if self.store.is_member(chat.id, username).await? {
            self.bot.send_message(chat, &already_joined(username)).await
        } else {
            self.store.add_member(chat.id, username).await?;
            info!(chat_id = chat.id, participant = username, "Participant opted in");
            self.bot.send_message(chat, &joined(username)).await
        }
    }

    /// `/remove_me`: removes the sender from the chat's list if they are on it.
    async fn handle_remove_me(&self, message: &Message) -> Result<()> {
        let chat = &message.chat;
        let Some(username) = message.user.username.as_deref() else {
            return self.bot.send_message(chat, NO_USERNAME).await;
        };

        let lock = self.chat_lock(chat.id).await;
        let _guard = lock.lock().await;

        if self.store.is_member(chat.id, username).await? {
            self.store.remove_member(chat.id, username).await?;
            info!(chat_id = chat.id, participant = username, "Participant opted out");
            self.bot.send_message(chat, &removed(username)).await
        } else {
            self.bot.send_message(chat, &not_joined(username)).await
        }
    }

    /// `/go`: read-only roll call, mentioning every member in insertion order.
    async fn handle_go(&self, message: &Message) -> Result<()> {
        let chat = &message.chat;
        let members = self.store.list_members(chat.id).await?;

        if members.is_empty() {
            self.bot.send_message(chat, NOBODY_READY).await
        } else {
            let mentions = members
                .iter()
                .map(|m| format!("@{}", m))
                .collect::<Vec<_>>()
                .join(", ");
            self.bot.send_message(chat, &roll_call(&mentions)).await
        }
    }

    /// Lock serializing check-then-act sequences for one chat. Lock entries
    /// are never reclaimed; the map grows by one small allocation per chat
    /// ever seen.
    async fn chat_lock(&self, chat_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self.chat_locks.lock().await;
        locks.entry(chat_id).or_default().clone()
    }
}
