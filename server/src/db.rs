// server/src/db.rs

//! Store bootstrap: connection pool, schema and the stock catalog seed.

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{NewProduct, Price, Product};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};

// `UNIQUE (email, product_id)` is what the cart upsert conflicts on.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS product (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  description TEXT,
  price_cents INTEGER NOT NULL CHECK (price_cents >= 0),
  image_url TEXT NOT NULL,
  category TEXT,
  created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS cart_item (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  product_id INTEGER NOT NULL REFERENCES product(id) ON DELETE RESTRICT,
  email TEXT NOT NULL,
  quantity INTEGER NOT NULL DEFAULT 1 CHECK (typeof(quantity) = 'integer' AND quantity >= 1),
  created_at TEXT NOT NULL,
  UNIQUE (email, product_id)
);
"#;

pub async fn connect(config: &AppConfig) -> Result<SqlitePool> {
  connect_with(&config.database_url, config.db_max_connections, config.db_acquire_timeout).await
}

#[instrument(name = "db::connect", skip(database_url), err(Display))]
pub async fn connect_with(database_url: &str, max_connections: u32, acquire_timeout: Duration) -> Result<SqlitePool> {
  let opts = SqliteConnectOptions::from_str(database_url)?
    .create_if_missing(true)
    .journal_mode(SqliteJournalMode::Wal)
    .synchronous(SqliteSynchronous::Normal)
    .foreign_keys(true)
    // Writers queue on the file lock instead of failing straight away.
    .busy_timeout(Duration::from_secs(5));

  let pool = SqlitePoolOptions::new()
    .max_connections(max_connections)
    .acquire_timeout(acquire_timeout)
    .connect_with(opts)
    .await?;

  info!(max_connections, "Connected to the store.");
  Ok(pool)
}

#[instrument(name = "db::migrate", skip(pool), err(Display))]
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
  sqlx::query(SCHEMA_SQL).execute(pool).await?;
  info!("Schema is up to date.");
  Ok(())
}

pub async fn insert_product(pool: &SqlitePool, new_product: &NewProduct) -> Result<Product> {
  let product = sqlx::query_as::<_, Product>(
    r#"
    INSERT INTO product (id, name, description, price_cents, image_url, category, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
    RETURNING id, name, description, price_cents, image_url, category, created_at
    "#,
  )
  .bind(new_product.id)
  .bind(&new_product.name)
  .bind(&new_product.description)
  .bind(new_product.price)
  .bind(&new_product.image_url)
  .bind(&new_product.category)
  .bind(Utc::now())
  .fetch_one(pool)
  .await?;

  Ok(product)
}

/// Loads the stock catalog. Rows whose id already exists are left alone, so
/// running this on every start is harmless. Returns how many rows were added.
#[instrument(name = "db::seed_products", skip(pool), err(Display))]
pub async fn seed_products(pool: &SqlitePool) -> Result<u64> {
  let now = Utc::now();
  let mut tx = pool.begin().await?;
  let mut inserted = 0;

  for product in stock_catalog() {
    let result = sqlx::query(
      r#"
      INSERT OR IGNORE INTO product (id, name, description, price_cents, image_url, category, created_at)
      VALUES (?, ?, ?, ?, ?, ?, ?)
      "#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.image_url)
    .bind(&product.category)
    .bind(now)
    .execute(&mut *tx)
    .await?;
    inserted += result.rows_affected();
  }

  tx.commit().await?;
  info!(inserted, "Seeded product catalog.");
  Ok(inserted)
}

pub fn stock_catalog() -> Vec<NewProduct> {
  let stock: [(i64, &str, &str, i64, &str, &str); 10] = [
    (1, "Wireless Headphones", "High-quality wireless headphones with noise cancellation.", 19999, "/products/headphones.png", "Electronics"),
    (2, "Smart Watch", "Track your fitness and get notifications on the go.", 14999, "/products/watch.png", "Wearables"),
    (3, "Bluetooth Speaker", "Portable speaker with deep bass and crisp sound.", 8999, "/products/speaker.png", "Audio"),
    (4, "Gaming Mouse", "Ergonomic design with customizable DPI settings.", 5999, "/products/mouse.png", "Gaming"),
    (5, "Backpack", "Durable backpack perfect for travel and daily use.", 6999, "/products/backpack.png", "Accessories"),
    (6, "LED Desk Lamp", "Modern desk lamp with adjustable brightness.", 3999, "/products/lamp.png", "Home"),
    (7, "Running Shoes", "Comfortable and lightweight running shoes.", 12999, "/products/shoes.png", "Footwear"),
    (8, "Wireless Charger", "Fast wireless charging pad compatible with all devices.", 2999, "/products/charger.png", "Electronics"),
    (9, "Notebook", "Hardcover notebook with premium quality paper.", 1499, "/products/notebook.png", "Stationery"),
    (10, "Sunglasses", "Stylish sunglasses with UV protection.", 2499, "/products/sunglass.png", "Fashion"),
  ];

  stock
    .into_iter()
    .map(|(id, name, description, cents, image_url, category)| NewProduct {
      id,
      name: name.to_string(),
      description: Some(description.to_string()),
      price: Price::from_cents(cents),
      image_url: image_url.to_string(),
      category: Some(category.to_string()),
    })
    .collect()
}
