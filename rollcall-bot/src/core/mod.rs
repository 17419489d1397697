//! Core types and traits: Bot, Message, errors, logger. Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, ReplyKeyboard};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Message, ToCoreMessage, ToCoreUser, User};
