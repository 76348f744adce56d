// server/src/services/chat_service.rs

//! Relay between the voice chat page and the external conversational backend.

use crate::errors::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Serialize)]
struct ChatRequest<'a> {
  text: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
  reply: String,
}

#[derive(Debug, Clone)]
pub struct ChatClient {
  http: reqwest::Client,
  chat_url: String,
}

impl ChatClient {
  pub fn new(backend_base_url: &str, timeout: Duration) -> Result<Self> {
    let http = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| AppError::Config(format!("Failed to build chat HTTP client: {}", e)))?;

    Ok(Self {
      http,
      chat_url: format!("{}/chat", backend_base_url.trim_end_matches('/')),
    })
  }

  /// Sends `text` to the backend once and returns its reply. No retries.
  #[instrument(name = "chat_service::relay", skip(self, text), fields(chat_url = %self.chat_url), err(Display))]
  pub async fn relay(&self, text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
      return Err(AppError::InvalidArgument("Message text is required".to_string()));
    }

    let response = self
      .http
      .post(&self.chat_url)
      .json(&ChatRequest { text })
      .send()
      .await?
      .error_for_status()?;

    let body: ChatReply = response.json().await?;
    debug!(reply_len = body.reply.len(), "Chat backend replied.");
    Ok(body.reply)
  }
}
