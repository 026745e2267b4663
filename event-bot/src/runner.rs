//! Startup wiring: config → tracing → storage → catalog → Telegram → polling loop.

use anyhow::{Context, Result};
use eventbot_core::{init_tracing, Bot, UpdateSource};
use eventbot_telegram::{run_polling, PollingOptions, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::sync::Arc;
use storage::{BookmarkRepository, BookmarkStore};
use timepad_client::{mask_token, EventCatalog, TimepadClient};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::config::BotConfig;
use crate::handlers::{CommandHandler, LoggingHandler};

/// Logging first, then command dispatch.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    store: Arc<dyn BookmarkStore>,
    catalog: Arc<dyn EventCatalog>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(bot, store, catalog)))
}

/// Builds the catalog client, pointed at `TIMEPAD_API_URL` when set.
pub fn build_catalog(config: &BotConfig) -> TimepadClient {
    let client = TimepadClient::new(config.timepad_api_key().to_string());
    match config.timepad_api_url() {
        Some(url) => client.with_base_url(url),
        None => client,
    }
}

/// Main entry: validate config, init logging, open storage, verify the bot token, then poll until
/// Ctrl+C / SIGTERM. Any failure before polling starts is returned (fatal).
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        database_url = %config.database_url(),
        timepad_api_key = %mask_token(config.timepad_api_key()),
        poll_interval_ms = config.poll_interval().as_millis() as u64,
        "Initializing bot"
    );

    let repo = BookmarkRepository::new(config.database_url())
        .await
        .with_context(|| format!("Open database {}", config.database_url()))?;
    let catalog = build_catalog(&config);
    info!(base_url = %catalog.base_url(), "TimePad client ready");

    let teloxide_bot = config.telegram().build_bot()?;
    let adapter = Arc::new(TelegramBotAdapter::new(teloxide_bot));
    let bot_name = adapter
        .bot_name()
        .await
        .context("Telegram getMe failed (check BOT_TOKEN)")?;
    info!(bot_name = %bot_name, "Bot is now running");

    let chain = build_handler_chain(adapter.clone(), Arc::new(repo), Arc::new(catalog));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let source: Arc<dyn UpdateSource> = adapter;
    let options = PollingOptions {
        interval: config.poll_interval(),
        ..PollingOptions::default()
    };
    run_polling(source, chain, options, shutdown_rx).await;

    info!("Bot stopped");
    Ok(())
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received, stopping after the current cycle");
}
