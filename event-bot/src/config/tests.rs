//! Config tests.

use super::BotConfig;
use serial_test::serial;
use std::env;
use std::time::Duration;

fn clear_optional_vars() {
    env::remove_var("DATABASE_URL");
    env::remove_var("LOG_FILE");
    env::remove_var("TELEGRAM_API_URL");
    env::remove_var("TELOXIDE_API_URL");
    env::remove_var("TIMEPAD_API_URL");
    env::remove_var("POLL_INTERVAL_MS");
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_optional_vars();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TIMEPAD_API_KEY", "test_key");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert_eq!(config.timepad_api_key(), "test_key");
    assert!(config.telegram_api_url().is_none());
    assert!(config.timepad_api_url().is_none());
    assert_eq!(config.database_url(), "eventbot.db");
    assert_eq!(config.log_file(), "logs/event-bot.log");
    assert_eq!(config.poll_interval(), Duration::from_millis(1000));
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_optional_vars();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("TIMEPAD_API_KEY", "custom_key");
    env::set_var("DATABASE_URL", "sqlite:///tmp/events.db");
    env::set_var("LOG_FILE", "/tmp/event-bot.log");
    env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
    env::set_var("TIMEPAD_API_URL", "http://127.0.0.1:8082/v1");
    env::set_var("POLL_INTERVAL_MS", "250");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.database_url(), "sqlite:///tmp/events.db");
    assert_eq!(config.log_file(), "/tmp/event-bot.log");
    assert_eq!(config.telegram_api_url(), Some("http://127.0.0.1:8081"));
    assert_eq!(config.timepad_api_url(), Some("http://127.0.0.1:8082/v1"));
    assert_eq!(config.poll_interval(), Duration::from_millis(250));
    assert!(config.validate().is_ok());

    let telegram = config.telegram();
    assert_eq!(telegram.bot_token, "custom_token");
    assert_eq!(telegram.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));

    clear_optional_vars();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_optional_vars();
    env::set_var("BOT_TOKEN", "env_token");
    env::set_var("TIMEPAD_API_KEY", "test_key");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");
}

#[test]
#[serial]
fn test_load_config_requires_keys() {
    clear_optional_vars();
    env::remove_var("BOT_TOKEN");
    env::set_var("TIMEPAD_API_KEY", "test_key");
    assert!(BotConfig::load(None).is_err());

    env::set_var("BOT_TOKEN", "test_token");
    env::remove_var("TIMEPAD_API_KEY");
    assert!(BotConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_validate_rejects_bad_urls() {
    clear_optional_vars();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TIMEPAD_API_KEY", "test_key");

    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    env::remove_var("TELEGRAM_API_URL");

    env::set_var("TIMEPAD_API_URL", "also not a url");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    env::remove_var("TIMEPAD_API_URL");
}

#[test]
#[serial]
fn test_poll_interval_must_be_positive_number() {
    clear_optional_vars();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TIMEPAD_API_KEY", "test_key");

    env::set_var("POLL_INTERVAL_MS", "0");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    env::set_var("POLL_INTERVAL_MS", "soon");
    assert!(BotConfig::load(None).is_err());

    env::remove_var("POLL_INTERVAL_MS");
}
