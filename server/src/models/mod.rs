// server/src/models/mod.rs

//! Contains data structures representing database entities and the value types they carry.

pub mod cart_item;
pub mod identity;
pub mod price;
pub mod product;

// Re-export the model structs for convenient access
pub use cart_item::{CartItem, CartLine};
pub use identity::UserIdentity;
pub use price::Price;
pub use product::{CatalogEntry, NewProduct, Product};
