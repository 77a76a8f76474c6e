// src/features/mod.rs
pub mod analytics;
