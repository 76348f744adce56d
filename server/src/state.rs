// server/src/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::chat_service::ChatClient;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: SqlitePool,
  pub chat_client: ChatClient,
}

impl AppState {
  pub fn new(db_pool: SqlitePool, config: &AppConfig) -> Result<Self> {
    let chat_client = ChatClient::new(&config.chat_backend_url, config.chat_timeout)?;
    Ok(Self { db_pool, chat_client })
  }
}
