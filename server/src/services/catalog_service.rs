// server/src/services/catalog_service.rs

//! Read-only catalog queries, optionally annotated with the caller's cart state.

use crate::errors::{AppError, Result};
use crate::models::{CatalogEntry, Product, UserIdentity};
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

const PRODUCT_COLUMNS: &str = "p.id, p.name, p.description, p.price_cents, p.image_url, p.category, p.created_at";

#[instrument(name = "catalog_service::list_products", skip(pool), err(Display))]
pub async fn list_products(pool: &SqlitePool) -> Result<Vec<Product>> {
  let products: Vec<Product> = sqlx::query_as(&format!("SELECT {} FROM product p ORDER BY p.id", PRODUCT_COLUMNS))
    .fetch_all(pool)
    .await?;

  info!("Fetched {} products.", products.len());
  Ok(products)
}

/// Case-insensitive substring match on name, description and category.
/// A blank query lists the whole catalog.
#[instrument(name = "catalog_service::search_products", skip(pool), err(Display))]
pub async fn search_products(pool: &SqlitePool, query: &str) -> Result<Vec<Product>> {
  let query = query.trim();
  if query.is_empty() {
    return list_products(pool).await;
  }

  let pattern = format!("%{}%", escape_like(query));
  let products: Vec<Product> = sqlx::query_as(&format!(
    r#"
    SELECT {} FROM product p
    WHERE p.name LIKE ? ESCAPE '\'
       OR p.description LIKE ? ESCAPE '\'
       OR p.category LIKE ? ESCAPE '\'
    ORDER BY p.id
    "#,
    PRODUCT_COLUMNS
  ))
  .bind(&pattern)
  .bind(&pattern)
  .bind(&pattern)
  .fetch_all(pool)
  .await?;

  debug!(matches = products.len(), "Product search finished.");
  Ok(products)
}

#[instrument(name = "catalog_service::get_product", skip(pool), err(Display))]
pub async fn get_product(pool: &SqlitePool, product_id: i64) -> Result<Product> {
  let product: Option<Product> = sqlx::query_as(&format!("SELECT {} FROM product p WHERE p.id = ?", PRODUCT_COLUMNS))
    .bind(product_id)
    .fetch_optional(pool)
    .await?;

  product.ok_or(AppError::ProductNotFound(product_id))
}

/// Lists every product with `in_cart` set for lines owned by `identity`.
/// Without an identity nothing is in the cart.
#[instrument(
  name = "catalog_service::list_products_for_user",
  skip(pool, identity),
  fields(user = identity.map(UserIdentity::as_str).unwrap_or("<anonymous>")),
  err(Display)
)]
pub async fn list_products_for_user(pool: &SqlitePool, identity: Option<&UserIdentity>) -> Result<Vec<CatalogEntry>> {
  let Some(identity) = identity else {
    let products = list_products(pool).await?;
    return Ok(
      products
        .into_iter()
        .map(|product| CatalogEntry { product, in_cart: false })
        .collect(),
    );
  };

  let entries: Vec<CatalogEntry> = sqlx::query_as(&format!(
    r#"
    SELECT {}, (c.id IS NOT NULL) AS in_cart
    FROM product p
    LEFT JOIN cart_item c ON c.product_id = p.id AND c.email = ?
    ORDER BY p.id
    "#,
    PRODUCT_COLUMNS
  ))
  .bind(identity.as_str())
  .fetch_all(pool)
  .await?;

  Ok(entries)
}

fn escape_like(raw: &str) -> String {
  let mut escaped = String::with_capacity(raw.len());
  for ch in raw.chars() {
    if matches!(ch, '%' | '_' | '\\') {
      escaped.push('\\');
    }
    escaped.push(ch);
  }
  escaped
}
