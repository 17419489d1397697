//! Telegram transport: teloxide adapters and the REPL runner.

pub mod adapters;
pub mod bot_adapter;
pub mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
