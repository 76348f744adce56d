// server/src/web/handlers/voice_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::services::voice_service;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCartRequestPayload {
  pub product_id: Option<i64>,
  pub email: Option<String>,
  pub quantity: Option<i64>,
}

#[instrument(
    name = "handler::voice_add_to_cart",
    skip(app_state, req_payload),
    fields(product_id = ?req_payload.product_id, quantity = ?req_payload.quantity)
)]
pub async fn voice_add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<VoiceCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  let outcome = voice_service::voice_add_to_cart(
    &app_state.db_pool,
    payload.email.as_deref(),
    payload.product_id,
    payload.quantity,
  )
  .await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Item added to cart successfully",
      "product": outcome.product,
      "quantity": outcome.cart_item.quantity,
  })))
}
