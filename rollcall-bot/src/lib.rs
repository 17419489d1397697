//! # Roll-call Telegram bot
//!
//! Tracks, per chat, which users have opted in to a call-to-action and
//! broadcasts the list on demand. Four commands (`/start`, `/add_me`,
//! `/remove_me`, `/go`) against a Redis-backed membership store.
//!
//! Core (Message, Bot trait, errors, logging), commands (router + handlers),
//! and telegram (REPL, adapters) are separate modules so handlers stay
//! transport-free and testable with fakes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod runner;
pub mod telegram;

pub use crate::cli::{load_config, Cli, Commands};

pub use crate::commands::{command_token, Command, CommandHandlers, COMMAND_PREFIX};

pub use crate::core::{
    init_tracing, Bot, BotError, Chat, Message, ReplyKeyboard, Result, ToCoreMessage, ToCoreUser,
    User,
};

pub use crate::config::BotConfig;
pub use crate::runner::run_bot;

pub use crate::telegram::{
    run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper,
};
