//! Minimal transport config: token and optional API URL. The application fills it from its own env config.

use anyhow::{Context, Result};

/// Minimal Telegram bot config (connectivity only).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Builds config with the given token; API URL None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Builds the teloxide Bot, pointed at `telegram_api_url` when set (mock servers in tests).
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("TELEGRAM_API_URL is not a valid URL: {}", url_str))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
