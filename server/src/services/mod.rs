// server/src/services/mod.rs

//! Business operations. Every function takes the store pool and, where
//! ownership matters, the caller's verified identity explicitly.

pub mod cart_service;
pub mod catalog_service;
pub mod chat_service;
pub mod voice_service;
