// server/src/models/identity.rs

use std::fmt;

/// Verified user identity (an e-mail address in practice) that owns cart lines.
///
/// Only constructed through [`UserIdentity::parse`], so a value of this type
/// is never blank. Services take it explicitly instead of reading any
/// request-global session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity(String);

impl UserIdentity {
  /// Returns `None` for empty or whitespace-only input.
  pub fn parse(raw: &str) -> Option<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      None
    } else {
      Some(Self(trimmed.to_string()))
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for UserIdentity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
