//! Startup configuration.
//!
//! The bot needs exactly one secret: the Telegram bot token. A missing
//! token is the single fatal startup condition; everything after that
//! point recovers locally.

use anyhow::{Context, Result, ensure};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
}

impl BotConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_VAR).with_context(|| {
            format!("{TOKEN_VAR} is not set; put the bot token in the environment or a .env file")
        })?;
        ensure!(!token.trim().is_empty(), "{TOKEN_VAR} is set but empty");
        Ok(Self { token })
    }
}

/// Loads a dotenv file if one exists at `path`. Absence is fine; the
/// token may come from the real environment instead.
pub fn load_env_file(path: &str) {
    let _ = dotenvy::from_path(path);
}
