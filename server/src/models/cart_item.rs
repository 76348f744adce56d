// server/src/models/cart_item.rs

use super::Price;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub id: i64,
  pub product_id: i64,
  pub email: String,
  pub quantity: i64,
  pub created_at: DateTime<Utc>,
}

/// Cart listing row: a line item joined with the product fields the cart view needs.
///
/// Product fields are `None` only when the product reference fails to resolve.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub cart_id: i64,
  pub quantity: i64,
  pub product_id: i64,
  pub name: Option<String>,
  pub price: Option<Price>,
  pub image_url: Option<String>,
}

impl CartLine {
  /// True when the line points at a product the catalog no longer has.
  pub fn is_orphaned(&self) -> bool {
    self.name.is_none()
  }
}
