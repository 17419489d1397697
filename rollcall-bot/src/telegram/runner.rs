//! REPL runner: converts teloxide messages to core::Message and hands them to
//! the command handlers. One bad message never terminates the loop.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use crate::commands::CommandHandlers;
use crate::core::ToCoreMessage;

use super::adapters::TelegramMessageWrapper;

/// Starts the receive loop with the given teloxide Bot and handlers.
///
/// Calls `get_me()` once to log the bot identity, then processes each update:
/// non-text updates are ignored with a debug line; text messages are converted
/// to core form and dispatched in a spawned task, with handler errors logged
/// rather than propagated.
#[instrument(skip(bot, handlers))]
pub async fn run_repl(bot: teloxide::Bot, handlers: Arc<CommandHandlers>) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Running as");
        }
    }

    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let handlers = handlers.clone();

            async move {
                if msg.text().is_none() {
                    debug!(chat_id = msg.chat.id.0, "Ignoring non-text update");
                    return Ok(());
                }

                let core_msg = TelegramMessageWrapper(&msg).to_core();
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received message"
                );

                tokio::spawn(async move {
                    if let Err(e) = handlers.dispatch(&core_msg).await {
                        error!(
                            error = %e,
                            chat_id = core_msg.chat.id,
                            user_id = core_msg.user.id,
                            "Command handling failed"
                        );
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
