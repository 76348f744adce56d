// server/src/web/extractors.rs

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::debug;

use crate::errors::AppError;
use crate::models::UserIdentity;

/// Header carrying the identity verified by the upstream identity provider.
pub const IDENTITY_HEADER: &str = "X-User-Email";

/// The caller's verified identity. Extraction fails with `Unauthenticated`
/// when the header is missing or blank; use `Option<AuthenticatedUser>` on
/// routes where anonymous access is allowed.
#[derive(Debug)]
pub struct AuthenticatedUser {
  pub identity: UserIdentity,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let identity = req
      .headers()
      .get(IDENTITY_HEADER)
      .and_then(|value| value.to_str().ok())
      .and_then(UserIdentity::parse);

    match identity {
      Some(identity) => ready(Ok(AuthenticatedUser { identity })),
      None => {
        debug!("AuthenticatedUser extractor: missing or blank {} header.", IDENTITY_HEADER);
        ready(Err(AppError::Unauthenticated))
      }
    }
  }
}
