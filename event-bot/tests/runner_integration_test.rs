//! End-to-end dispatch through [`event_bot::build_handler_chain`] with the real TimePad client
//! pointed at a mockito server (via `TIMEPAD_API_URL`) and a temp SQLite database.

mod common;

use std::env;
use std::sync::Arc;

use common::mock_bot::MockBot;
use common::text_update;
use event_bot::{build_catalog, build_handler_chain, BotConfig};
use mockito::Matcher;
use serial_test::serial;
use storage::BookmarkRepository;
use tempfile::TempDir;

const API_KEY: &str = "integration-key";

fn load_config(server_url: &str) -> BotConfig {
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TIMEPAD_API_KEY", API_KEY);
    env::set_var("TIMEPAD_API_URL", server_url);
    env::remove_var("POLL_INTERVAL_MS");
    let config = BotConfig::load(None).unwrap();
    env::remove_var("TIMEPAD_API_URL");
    config.validate().unwrap();
    config
}

/// **Test: /search hits GET /events with the bearer token and renders entity-stripped names.**
#[tokio::test]
#[serial]
async fn test_search_through_timepad_client() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/events")
        .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "джаз".into()),
            Matcher::UrlEncoded("cities".into(), "Москва".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"values": [{"id": 100, "name": "&quot;Title&quot;", "url": "https://afisha.timepad.ru/event/100"}]}"#,
        )
        .create_async()
        .await;

    let config = load_config(&server.url());
    let dir = TempDir::new().unwrap();
    let repo = BookmarkRepository::new(dir.path().join("e2e.db").to_str().unwrap())
        .await
        .unwrap();
    let bot = MockBot::new();
    let chain = build_handler_chain(bot.clone(), Arc::new(repo), Arc::new(build_catalog(&config)));

    chain.handle(&text_update(1, "/search джаз")).await.unwrap();

    mock.assert_async().await;
    let reply = bot.last_text().unwrap();
    assert!(reply.contains("Название: Title\n"), "reply: {}", reply);
    assert!(!reply.contains("quot;"));
}

/// **Test: bookmarks added by command are resolved one by one; a failing lookup is skipped.**
#[tokio::test]
#[serial]
async fn test_wishlist_through_timepad_client() {
    let mut server = mockito::Server::new_async().await;
    let _ok = server
        .mock("GET", "/events/1")
        .with_status(200)
        .with_body(r#"{"id": 1, "name": "Rust &amp; Coffee", "url": "https://afisha.timepad.ru/event/1"}"#)
        .create_async()
        .await;
    let _gone = server
        .mock("GET", "/events/2")
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let config = load_config(&server.url());
    let dir = TempDir::new().unwrap();
    let repo = BookmarkRepository::new(dir.path().join("e2e.db").to_str().unwrap())
        .await
        .unwrap();
    let bot = MockBot::new();
    let chain = build_handler_chain(bot.clone(), Arc::new(repo), Arc::new(build_catalog(&config)));

    chain.handle(&text_update(1, "/addtolist wishlist 1")).await.unwrap();
    chain.handle(&text_update(2, "/addtolist wishlist 2")).await.unwrap();
    chain.handle(&text_update(3, "/getwishlist")).await.unwrap();

    assert_eq!(
        bot.last_text().unwrap(),
        "Список желаний:\n\nID события: 1\nНазвание: Rust  Coffee\nURL: https://afisha.timepad.ru/event/1\n\n"
    );
    assert_eq!(bot.texts().len(), 3);
}

/// **Test: a catalog outage aborts the update with an error and sends nothing.**
#[tokio::test]
#[serial]
async fn test_catalog_outage_aborts_update() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/events")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let config = load_config(&server.url());
    let dir = TempDir::new().unwrap();
    let repo = BookmarkRepository::new(dir.path().join("e2e.db").to_str().unwrap())
        .await
        .unwrap();
    let bot = MockBot::new();
    let chain = build_handler_chain(bot.clone(), Arc::new(repo), Arc::new(build_catalog(&config)));

    let err = chain.handle(&text_update(1, "/recommendations")).await.unwrap_err();

    assert!(err.to_string().contains("503"), "error: {}", err);
    assert!(bot.sent().is_empty());
}
