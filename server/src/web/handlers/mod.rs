// server/src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod chat_handlers;
pub mod product_handlers;
pub mod voice_handlers;
