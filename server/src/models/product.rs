// server/src/models/product.rs

use super::Price;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  #[sqlx(rename = "price_cents")]
  pub price: Price,
  pub image_url: String,
  pub category: Option<String>,
  pub created_at: DateTime<Utc>,
}

/// A catalog row annotated with whether the requesting user already has it in their cart.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
  #[sqlx(flatten)]
  #[serde(flatten)]
  pub product: Product,
  pub in_cart: bool,
}

/// Insert form of a product. Ids are fixed by the catalog, not assigned by the store.
#[derive(Debug, Clone)]
pub struct NewProduct {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub price: Price,
  pub image_url: String,
  pub category: Option<String>,
}
