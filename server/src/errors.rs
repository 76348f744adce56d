// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Not signed in")]
  Unauthenticated,

  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  #[error("Product with ID {0} not found.")]
  ProductNotFound(i64),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Forbidden: {0}")]
  Forbidden(String),

  #[error("Database Error: {0}")]
  Store(#[from] sqlx::Error),

  #[error("Chat backend error: {0}")]
  ChatBackend(String),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
    AppError::ChatBackend(err.to_string())
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
      AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
      AppError::ProductNotFound(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Forbidden(_) => StatusCode::FORBIDDEN,
      AppError::ChatBackend(_) => StatusCode::BAD_GATEWAY,
      AppError::Store(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Rejecting request");
    }

    // Store and config failures stay server-side.
    let message = match self {
      AppError::Store(_) => "Database operation failed".to_string(),
      AppError::Config(_) => "An internal error occurred".to_string(),
      AppError::ChatBackend(_) => "Chat backend unavailable".to_string(),
      AppError::InvalidArgument(m) | AppError::NotFound(m) | AppError::Forbidden(m) => m.clone(),
      other => other.to_string(),
    };

    HttpResponse::build(status).json(json!({ "error": message }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
