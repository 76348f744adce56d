// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use once_cell::sync::Lazy;
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::Level;
use wallie::models::{NewProduct, Price, Product, UserIdentity};
use wallie::{db, AppConfig, AppState};

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Fresh, migrated in-memory store. A single connection, since every
/// in-memory SQLite connection is its own database.
pub async fn test_pool() -> SqlitePool {
  setup_tracing();
  let pool = db::connect_with("sqlite::memory:", 1, Duration::from_secs(5))
    .await
    .expect("in-memory store should open");
  db::migrate(&pool).await.expect("schema should apply");
  pool
}

/// In-memory store loaded with the stock catalog (ids 1..=10).
pub async fn seeded_pool() -> SqlitePool {
  let pool = test_pool().await;
  db::seed_products(&pool).await.expect("seed should load");
  pool
}

pub async fn insert_widget(pool: &SqlitePool) -> Product {
  db::insert_product(
    pool,
    &NewProduct {
      id: 1,
      name: "Widget".to_string(),
      description: Some("A very useful widget.".to_string()),
      price: Price::from_cents(999),
      image_url: "/products/widget.png".to_string(),
      category: Some("Gadgets".to_string()),
    },
  )
  .await
  .expect("widget should insert")
}

pub fn identity(raw: &str) -> UserIdentity {
  UserIdentity::parse(raw).expect("test identity must not be blank")
}

pub fn test_config(chat_backend_url: &str) -> AppConfig {
  let chat_backend_url = chat_backend_url.to_string();
  AppConfig::from_lookup(move |key| match key {
    "DATABASE_URL" => Some("sqlite::memory:".to_string()),
    "CHAT_BACKEND_URL" => Some(chat_backend_url.clone()),
    "CHAT_TIMEOUT_SECS" => Some("2".to_string()),
    _ => None,
  })
  .expect("test config should load")
}

pub fn test_state(pool: SqlitePool, chat_backend_url: &str) -> AppState {
  AppState::new(pool, &test_config(chat_backend_url)).expect("state should build")
}

pub async fn cart_row_count(pool: &SqlitePool) -> i64 {
  sqlx::query_scalar("SELECT COUNT(*) FROM cart_item")
    .fetch_one(pool)
    .await
    .expect("count should run")
}
