//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; store failures arrive via
//! [`membership_store::StoreError`].

use thiserror::Error;

/// Top-level error for the roll-call bot (store, transport, config).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Store error: {0}")]
    Store(#[from] membership_store::StoreError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
