//! latin-bot binary: `run` starts the Telegram bot, `lookup` prints one translation.

use anyhow::Result;
use clap::Parser;
use latin_bot::{lookup_once, render_plain, run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Lookup { word } => {
            let outcome = lookup_once(&word).await?;
            print!("{}", render_plain(&outcome));
            Ok(())
        }
    }
}
