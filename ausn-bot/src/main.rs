use std::sync::Arc;

use clap::Parser;
use teloxide::Bot;
use tracing::{error, info};

use ausn_flow::ConversationFlow;

mod config;
mod logging;
mod telegram;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Telegram bot comparing the two AUSN taxation variants.
///
/// Loads the bot token from the environment (optionally via a dotenv
/// file), then long-polls Telegram for updates.
#[derive(Debug, Parser)]
struct Cli {
    /// Path to a dotenv file with TELEGRAM_BOT_TOKEN.
    #[arg(long, default_value = ".env")]
    env_file: String,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The dotenv file may carry RUST_LOG, so it loads before tracing.
    config::load_env_file(&cli.env_file);
    logging::init_default_logging();

    let config = config::BotConfig::from_env().inspect_err(|e| {
        error!("startup configuration incomplete: {e:#}");
    })?;

    let bot = Bot::new(config.token);
    let flow = Arc::new(ConversationFlow::new());

    info!("bot starting");
    telegram::run(bot, flow).await
}
