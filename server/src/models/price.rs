// server/src/models/price.rs

use serde::{Serialize, Serializer};
use std::fmt;

/// Fixed-point price in minor units (cents). Rendered on the wire as a
/// two-decimal number, e.g. `9.99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct Price(i64);

impl Price {
  pub const fn from_cents(cents: i64) -> Self {
    Self(cents)
  }

  pub fn as_f64(self) -> f64 {
    self.0 as f64 / 100.0
  }
}

impl fmt::Display for Price {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if self.0 < 0 { "-" } else { "" };
    let abs = self.0.unsigned_abs();
    write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
  }
}

impl Serialize for Price {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(self.as_f64())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn renders_two_decimals() {
    assert_eq!(Price::from_cents(999).to_string(), "9.99");
    assert_eq!(Price::from_cents(19999).to_string(), "199.99");
    assert_eq!(Price::from_cents(5).to_string(), "0.05");
    assert_eq!(Price::from_cents(-150).to_string(), "-1.50");
  }

  #[test]
  fn serializes_as_json_number() {
    let value = serde_json::to_value(Price::from_cents(999)).unwrap();
    assert_eq!(value, serde_json::json!(9.99));
  }
}
