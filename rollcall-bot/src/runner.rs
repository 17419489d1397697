//! Startup wiring: validate config, init logging, connect the store, run the REPL.

use std::sync::Arc;

use anyhow::Result;
use membership_store::{MembershipStore, RedisMembershipStore};
use tracing::{info, instrument};

use crate::commands::CommandHandlers;
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot as CoreBot};
use crate::telegram::{run_repl, TelegramBotAdapter};

/// Main entry: everything before this returning is startup, and startup
/// failures (missing token, unreachable store) abort the process with a
/// descriptive error.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        store_endpoint = %config.store.endpoint(),
        "Initializing bot"
    );

    // Unreachable Redis is fatal here; connect() names the endpoint.
    let store: Arc<dyn MembershipStore> =
        Arc::new(RedisMembershipStore::connect(&config.store).await?);

    let teloxide_bot = {
        let bot = teloxide::Bot::new(config.bot_token.clone());
        // validate() already rejected unparseable URLs.
        match config.telegram_api_url.as_deref().map(reqwest::Url::parse) {
            Some(Ok(url)) => bot.set_api_url(url),
            _ => bot,
        }
    };

    let adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handlers = Arc::new(CommandHandlers::new(store, adapter));

    info!("Bot started successfully");

    run_repl(teloxide_bot, handlers).await?;

    Ok(())
}
