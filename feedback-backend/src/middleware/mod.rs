// src/middleware/mod.rs
pub mod cors;

pub use cors::cors_layer;
