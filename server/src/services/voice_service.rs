// server/src/services/voice_service.rs

//! Voice intake: the add-to-cart path used by the voice assistant.
//!
//! The identity here is whatever the caller put in the request body, not a
//! verified session subject. Deployments must put their own authentication
//! in front of this entry point.

use crate::errors::{AppError, Result};
use crate::models::{CartItem, Product, UserIdentity};
use crate::services::{cart_service, catalog_service};
use sqlx::SqlitePool;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct VoiceCartOutcome {
  pub product: Product,
  pub cart_item: CartItem,
}

#[instrument(name = "voice_service::voice_add_to_cart", skip(pool, email), err(Display))]
pub async fn voice_add_to_cart(
  pool: &SqlitePool,
  email: Option<&str>,
  product_id: Option<i64>,
  quantity: Option<i64>,
) -> Result<VoiceCartOutcome> {
  // Store ids start at 1; zero or a negative id counts as no product.
  let product_id = product_id.filter(|id| *id > 0);
  let (identity, product_id) = match (email.and_then(UserIdentity::parse), product_id) {
    (Some(identity), Some(product_id)) => (identity, product_id),
    _ => {
      return Err(AppError::InvalidArgument(
        "Product ID and email are required".to_string(),
      ))
    }
  };
  let quantity = quantity.unwrap_or(1);
  if quantity < 1 {
    return Err(AppError::InvalidArgument("Quantity must be a positive number.".to_string()));
  }
  if quantity > cart_service::MAX_LINE_QUANTITY {
    return Err(AppError::InvalidArgument(format!(
      "Quantity must be at most {}.",
      cart_service::MAX_LINE_QUANTITY
    )));
  }

  info!(user = %identity, "Voice add-to-cart with caller-supplied identity.");

  let product = catalog_service::get_product(pool, product_id).await?;
  let cart_item = cart_service::upsert_line(pool, &identity, &product, quantity).await?;

  Ok(VoiceCartOutcome { product, cart_item })
}
