// server/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use wallie::{db, web, AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  // RUST_LOG overrides the default level; LOG_FORMAT=json switches to JSON lines
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE);
  if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
    subscriber.json().init();
  } else {
    subscriber.init();
  }

  tracing::info!("Starting Wallie server...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;

  let db_pool = db::connect(&app_config).await.context("Failed to connect to the store")?;
  db::migrate(&db_pool).await.context("Failed to apply schema")?;

  if app_config.seed_db {
    db::seed_products(&db_pool).await.context("Failed to seed product catalog")?;
  }

  let app_state = AppState::new(db_pool, &app_config).context("Failed to build application state")?;

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("Server terminated with an error")?;

  tracing::info!("Server shut down.");
  Ok(())
}
