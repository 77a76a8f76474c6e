// src/domain/mod.rs
pub mod feedback_model;
pub mod user_model;
