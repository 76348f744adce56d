// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::catalog_service;
use crate::state::AppState;
use crate::web::AuthenticatedUser;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub q: Option<String>,
}

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let products = match query_params.q.as_deref() {
    Some(q) => catalog_service::search_products(&app_state.db_pool, q).await?,
    None => catalog_service::list_products(&app_state.db_pool).await?,
  };

  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = catalog_service::get_product(&app_state.db_pool, product_id).await?;
  info!("Product {} fetched successfully.", product_id);
  Ok(HttpResponse::Ok().json(product))
}

/// Catalog view for the storefront: anonymous callers get every product with `inCart: false`.
#[instrument(name = "handler::catalog", skip(app_state, auth_user))]
pub async fn catalog_handler(
  app_state: web::Data<AppState>,
  auth_user: Option<AuthenticatedUser>,
) -> Result<HttpResponse, AppError> {
  let identity = auth_user.as_ref().map(|user| &user.identity);
  let entries = catalog_service::list_products_for_user(&app_state.db_pool, identity).await?;
  Ok(HttpResponse::Ok().json(entries))
}
