// server/src/lib.rs

//! Wallie shopping-assistant server.
//!
//! Serves the product catalog, per-user carts keyed by a verified identity,
//! the voice add-to-cart entry point and a relay to the conversational
//! chat backend. All state lives in a SQLite store; request handling is
//! stateless apart from the shared connection pool.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use state::AppState;
