// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // Store pool limits. Acquire timeout bounds every store call.
  pub db_max_connections: u32,
  pub db_acquire_timeout: Duration,

  // Load the stock catalog on startup
  pub seed_db: bool,

  // External conversational backend used by the chat relay
  pub chat_backend_url: String,
  pub chat_timeout: Duration,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from an arbitrary key lookup. `from_env` is the
  /// process-environment flavour of this.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = parse_var(&lookup, "SERVER_PORT", 8080u16)?;
    let database_url = lookup("DATABASE_URL")
      .filter(|url| !url.trim().is_empty())
      .ok_or_else(|| AppError::Config("Missing environment variable 'DATABASE_URL'".to_string()))?;

    let db_max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", 5u32)?;
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }
    let db_acquire_timeout = Duration::from_secs(parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5u64)?);

    let seed_db = parse_var(&lookup, "SEED_DB", false)?;

    let chat_backend_url = lookup("CHAT_BACKEND_URL").unwrap_or_else(|| "http://localhost:8000".to_string());
    let chat_timeout = Duration::from_secs(parse_var(&lookup, "CHAT_TIMEOUT_SECS", 30u64)?);

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      db_acquire_timeout,
      seed_db,
      chat_backend_url,
      chat_timeout,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, default: T) -> Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
  T::Err: Display,
{
  match lookup(var_name) {
    Some(raw) => raw
      .trim()
      .parse::<T>()
      .map_err(|e| AppError::Config(format!("Invalid {} value '{}': {}", var_name, raw, e))),
    None => Ok(default),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn defaults_apply_when_only_database_url_is_set() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();
    assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
    assert_eq!(cfg.db_max_connections, 5);
    assert_eq!(cfg.db_acquire_timeout, Duration::from_secs(5));
    assert!(!cfg.seed_db);
    assert_eq!(cfg.chat_backend_url, "http://localhost:8000");
  }

  #[test]
  fn missing_database_url_is_a_config_error() {
    let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, AppError::Config(m) if m.contains("DATABASE_URL")));
  }

  #[test]
  fn malformed_values_are_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:"), ("SERVER_PORT", "eighty")]))
      .unwrap_err();
    assert!(matches!(err, AppError::Config(m) if m.contains("SERVER_PORT")));

    let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:"), ("DB_MAX_CONNECTIONS", "0")]))
      .unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
  }
}
