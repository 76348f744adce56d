// server/src/web/routes.rs

use actix_web::web;

use crate::errors::AppError;
use crate::web::handlers::{cart_handlers, chat_handlers, product_handlers, voice_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Body, path and query parse failures all surface as InvalidArgument (400).
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .error_handler(|err, _req| AppError::InvalidArgument(format!("Malformed JSON body: {}", err)).into())
}

fn path_config() -> web::PathConfig {
  web::PathConfig::default()
    .error_handler(|err, _req| AppError::InvalidArgument(format!("Malformed path parameter: {}", err)).into())
}

fn query_config() -> web::QueryConfig {
  web::QueryConfig::default()
    .error_handler(|err, _req| AppError::InvalidArgument(format!("Malformed query string: {}", err)).into())
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .app_data(json_config())
      .app_data(path_config())
      .app_data(query_config())
      .route("/health", web::get().to(health_check_handler))
      // Product catalog
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
      )
      .route("/catalog", web::get().to(product_handlers::catalog_handler))
      // Cart, scoped to the identity in the request header
      .service(
        web::resource("/cart")
          .route(web::get().to(cart_handlers::get_cart_handler))
          .route(web::post().to(cart_handlers::add_to_cart_handler))
          .route(web::patch().to(cart_handlers::update_quantity_handler))
          .route(web::delete().to(cart_handlers::remove_from_cart_handler)),
      )
      // Voice assistant entry points
      .route("/voice-cart", web::post().to(voice_handlers::voice_add_to_cart_handler))
      .route("/chat", web::post().to(chat_handlers::chat_handler)),
  );
}
