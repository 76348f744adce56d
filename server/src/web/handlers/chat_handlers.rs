// server/src/web/handlers/chat_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ChatRequestPayload {
  pub text: Option<String>,
}

#[instrument(name = "handler::chat", skip(app_state, req_payload))]
pub async fn chat_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ChatRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let text = req_payload.text.as_deref().unwrap_or_default();
  let reply = app_state.chat_client.relay(text).await?;
  Ok(HttpResponse::Ok().json(json!({ "reply": reply })))
}
