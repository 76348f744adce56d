// server/src/services/cart_service.rs

//! Per-user cart operations.
//!
//! A user has at most one line per product. Adds go through a single
//! `INSERT ... ON CONFLICT (email, product_id) DO UPDATE` statement, so
//! concurrent adds for the same pair increment one row instead of racing
//! to insert two.

use crate::errors::{AppError, Result};
use crate::models::{CartItem, CartLine, Product, UserIdentity};
use crate::services::catalog_service;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

/// Upper bound on a single line's quantity, for adds and explicit updates alike.
pub const MAX_LINE_QUANTITY: i64 = 10_000;

#[instrument(name = "cart_service::get_cart", skip(pool, identity), fields(user = %identity), err(Display))]
pub async fn get_cart(pool: &SqlitePool, identity: &UserIdentity) -> Result<Vec<CartLine>> {
  let lines: Vec<CartLine> = sqlx::query_as(
    r#"
    SELECT c.id AS cart_id, c.quantity, c.product_id, p.name, p.price_cents AS price, p.image_url
    FROM cart_item c
    LEFT JOIN product p ON p.id = c.product_id
    WHERE c.email = ?
    ORDER BY c.id
    "#,
  )
  .bind(identity.as_str())
  .fetch_all(pool)
  .await?;

  for line in lines.iter().filter(|line| line.is_orphaned()) {
    warn!(
      cart_id = line.cart_id,
      product_id = line.product_id,
      "Data integrity anomaly: cart line references a missing product."
    );
  }

  info!("Fetched {} cart lines.", lines.len());
  Ok(lines)
}

/// Adds one unit of `product_id`, creating the line or incrementing the existing one.
#[instrument(name = "cart_service::add_to_cart", skip(pool, identity), fields(user = %identity), err(Display))]
pub async fn add_to_cart(pool: &SqlitePool, identity: &UserIdentity, product_id: i64) -> Result<CartItem> {
  let product = catalog_service::get_product(pool, product_id).await?;
  upsert_line(pool, identity, &product, 1).await
}

/// Insert-or-increment keyed on (identity, product). `quantity` must be
/// positive, and the resulting line may not exceed [`MAX_LINE_QUANTITY`].
pub(crate) async fn upsert_line(
  pool: &SqlitePool,
  identity: &UserIdentity,
  product: &Product,
  quantity: i64,
) -> Result<CartItem> {
  if !(1..=MAX_LINE_QUANTITY).contains(&quantity) {
    return Err(AppError::InvalidArgument(format!(
      "Quantity must be between 1 and {}.",
      MAX_LINE_QUANTITY
    )));
  }

  // A conflicting row that would go over the cap is left untouched and nothing is returned.
  let item: Option<CartItem> = sqlx::query_as(
    r#"
    INSERT INTO cart_item (product_id, email, quantity, created_at)
    VALUES (?, ?, ?, ?)
    ON CONFLICT (email, product_id) DO UPDATE SET quantity = cart_item.quantity + excluded.quantity
    WHERE cart_item.quantity + excluded.quantity <= ?
    RETURNING id, product_id, email, quantity, created_at
    "#,
  )
  .bind(product.id)
  .bind(identity.as_str())
  .bind(quantity)
  .bind(Utc::now())
  .bind(MAX_LINE_QUANTITY)
  .fetch_optional(pool)
  .await?;

  let item = item.ok_or_else(|| {
    warn!(product_id = product.id, added = quantity, "Cart line is at its quantity limit.");
    AppError::InvalidArgument(format!(
      "Cannot add {} more of product {}: a cart line holds at most {}.",
      quantity, product.id, MAX_LINE_QUANTITY
    ))
  })?;

  info!(
    cart_id = item.id,
    product_id = product.id,
    added = quantity,
    quantity = item.quantity,
    "Cart line upserted."
  );
  Ok(item)
}

#[instrument(name = "cart_service::remove_from_cart", skip(pool, identity), fields(user = %identity), err(Display))]
pub async fn remove_from_cart(pool: &SqlitePool, identity: &UserIdentity, cart_id: i64) -> Result<()> {
  ensure_owner(pool, identity, cart_id).await?;

  let result = sqlx::query("DELETE FROM cart_item WHERE id = ? AND email = ?")
    .bind(cart_id)
    .bind(identity.as_str())
    .execute(pool)
    .await?;

  // Lost a race with another removal of the same line.
  if result.rows_affected() == 0 {
    return Err(cart_line_not_found(cart_id));
  }

  info!(cart_id, "Cart line removed.");
  Ok(())
}

/// Sets the quantity of an owned line to `quantity` (1 to [`MAX_LINE_QUANTITY`]).
#[instrument(name = "cart_service::update_quantity", skip(pool, identity), fields(user = %identity), err(Display))]
pub async fn update_quantity(
  pool: &SqlitePool,
  identity: &UserIdentity,
  cart_id: i64,
  quantity: i64,
) -> Result<CartItem> {
  if quantity < 1 {
    return Err(AppError::InvalidArgument(
      "Quantity must be at least 1. Remove the item instead.".to_string(),
    ));
  }
  if quantity > MAX_LINE_QUANTITY {
    return Err(AppError::InvalidArgument(format!(
      "Quantity must be at most {}.",
      MAX_LINE_QUANTITY
    )));
  }
  ensure_owner(pool, identity, cart_id).await?;

  let item: Option<CartItem> = sqlx::query_as(
    r#"
    UPDATE cart_item SET quantity = ?
    WHERE id = ? AND email = ?
    RETURNING id, product_id, email, quantity, created_at
    "#,
  )
  .bind(quantity)
  .bind(cart_id)
  .bind(identity.as_str())
  .fetch_optional(pool)
  .await?;

  let item = item.ok_or_else(|| cart_line_not_found(cart_id))?;
  info!(cart_id, quantity, "Cart line quantity updated.");
  Ok(item)
}

async fn ensure_owner(pool: &SqlitePool, identity: &UserIdentity, cart_id: i64) -> Result<()> {
  let owner: Option<String> = sqlx::query_scalar("SELECT email FROM cart_item WHERE id = ?")
    .bind(cart_id)
    .fetch_optional(pool)
    .await?;

  match owner {
    None => Err(cart_line_not_found(cart_id)),
    Some(owner) if owner != identity.as_str() => {
      warn!(cart_id, "Cart line belongs to a different user.");
      Err(AppError::Forbidden(format!("Cart item {} does not belong to you.", cart_id)))
    }
    Some(_) => Ok(()),
  }
}

fn cart_line_not_found(cart_id: i64) -> AppError {
  AppError::NotFound(format!("Cart item {} not found.", cart_id))
}
