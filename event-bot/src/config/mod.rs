//! Application config: Telegram connectivity, TimePad key, database, logging and polling. Loaded from env.

use anyhow::Result;
use eventbot_telegram::TelegramConfig;
use std::env;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// Default SQLite file for bookmarks.
pub const DEFAULT_DATABASE_URL: &str = "eventbot.db";
/// Default log file path.
pub const DEFAULT_LOG_FILE: &str = "logs/event-bot.log";
/// Default delay between polling cycles.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Everything the bot needs at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    telegram_api_url: Option<String>,
    /// TIMEPAD_API_KEY
    timepad_api_key: String,
    /// TIMEPAD_API_URL
    timepad_api_url: Option<String>,
    /// DATABASE_URL: plain SQLite file path or `sqlite:` URL
    database_url: String,
    /// LOG_FILE
    log_file: String,
    /// POLL_INTERVAL_MS
    poll_interval_ms: u64,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let timepad_api_key =
            env::var("TIMEPAD_API_KEY").map_err(|_| anyhow::anyhow!("TIMEPAD_API_KEY not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let timepad_api_url = env::var("TIMEPAD_API_URL").ok();
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let poll_interval_ms = match env::var("POLL_INTERVAL_MS") {
            Ok(s) => s
                .parse()
                .map_err(|_| anyhow::anyhow!("POLL_INTERVAL_MS is not a number: {}", s))?,
            Err(_) => DEFAULT_POLL_INTERVAL_MS,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            timepad_api_key,
            timepad_api_url,
            database_url,
            log_file,
            poll_interval_ms,
        })
    }

    /// Validate config: optional URLs must parse, the poll interval must be positive.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(ref url_str) = self.timepad_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("TIMEPAD_API_URL is set but not a valid URL: {}", url_str);
            }
        }
        if self.timepad_api_key.trim().is_empty() {
            anyhow::bail!("TIMEPAD_API_KEY is empty");
        }
        if self.poll_interval_ms == 0 {
            anyhow::bail!("POLL_INTERVAL_MS must be greater than 0");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram_api_url.as_deref()
    }

    pub fn timepad_api_key(&self) -> &str {
        &self.timepad_api_key
    }

    pub fn timepad_api_url(&self) -> Option<&str> {
        self.timepad_api_url.as_deref()
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Transport part of the config, for building the teloxide bot.
    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig {
            bot_token: self.bot_token.clone(),
            telegram_api_url: self.telegram_api_url.clone(),
        }
    }
}
