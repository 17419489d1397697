//! Bot config: Telegram connection, logging, membership store. Loaded from env.

use std::env;

use anyhow::Result;
use membership_store::StoreConfig;

/// Process configuration. Everything comes from the environment (plus an
/// optional token override from the CLI); a `.env` file is loaded by main
/// before this runs.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL; default Telegram API when unset
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// Redis endpoint and credentials (REDIS_HOST/PORT/USERNAME/PASSWORD)
    pub store: StoreConfig,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// A missing token is fatal — the process refuses to start without one.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| {
                anyhow::anyhow!("BOT_TOKEN not set; export it or pass --token")
            })?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/rollcall-bot.log".to_string());
        let store = StoreConfig::from_env()?;

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            store,
        })
    }

    /// Validate config (telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
