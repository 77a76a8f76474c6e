// src/repository/mod.rs
pub mod feedback_repository;

pub use feedback_repository::{FeedbackRepository, FeedbackSource};
