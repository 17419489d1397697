//! Binary for the roll-call bot. Loads `.env`, parses the CLI, and runs.

use anyhow::Result;
use clap::Parser;
use rollcall_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
    }
}
