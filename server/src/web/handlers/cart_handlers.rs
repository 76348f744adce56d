// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::cart_service;
use crate::state::AppState;
use crate::web::AuthenticatedUser;

// --- Request DTOs ---
// Fields are optional so a missing one becomes a 400 with a useful message
// rather than a generic body-parse failure.

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequestPayload {
  pub product_id: Option<i64>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequestPayload {
  pub cart_id: Option<i64>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityRequestPayload {
  pub cart_id: Option<i64>,
  pub quantity: Option<i64>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
  value.ok_or_else(|| AppError::InvalidArgument(format!("'{}' is required", field)))
}

// --- Handler Implementations ---
// The identity extractor comes first so an anonymous request is a 401 even when its body is bad.

#[instrument(name = "handler::get_cart", skip(app_state, auth_user), fields(user = %auth_user.identity))]
pub async fn get_cart_handler(
  auth_user: AuthenticatedUser,
  app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
  let lines = cart_service::get_cart(&app_state.db_pool, &auth_user.identity).await?;
  Ok(HttpResponse::Ok().json(lines))
}

#[instrument(name = "handler::add_to_cart", skip(app_state, req_payload, auth_user), fields(user = %auth_user.identity))]
pub async fn add_to_cart_handler(
  auth_user: AuthenticatedUser,
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = required(req_payload.product_id, "productId")?;
  info!("Adding product {} to cart for {}", product_id, auth_user.identity);

  let item = cart_service::add_to_cart(&app_state.db_pool, &auth_user.identity, product_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "cartId": item.id,
      "quantity": item.quantity,
  })))
}

#[instrument(name = "handler::update_cart_quantity", skip(app_state, req_payload, auth_user), fields(user = %auth_user.identity))]
pub async fn update_quantity_handler(
  auth_user: AuthenticatedUser,
  app_state: web::Data<AppState>,
  req_payload: web::Json<UpdateQuantityRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let cart_id = required(req_payload.cart_id, "cartId")?;
  let quantity = required(req_payload.quantity, "quantity")?;

  let item = cart_service::update_quantity(&app_state.db_pool, &auth_user.identity, cart_id, quantity).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "quantity": item.quantity,
  })))
}

#[instrument(name = "handler::remove_from_cart", skip(app_state, req_payload, auth_user), fields(user = %auth_user.identity))]
pub async fn remove_from_cart_handler(
  auth_user: AuthenticatedUser,
  app_state: web::Data<AppState>,
  req_payload: web::Json<RemoveFromCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let cart_id = required(req_payload.cart_id, "cartId")?;

  cart_service::remove_from_cart(&app_state.db_pool, &auth_user.identity, cart_id).await?;

  Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
