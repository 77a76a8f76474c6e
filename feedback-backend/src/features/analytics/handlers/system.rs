// src/features/analytics/handlers/system.rs
use crate::features::analytics::dto::MessageResponse;
use axum::{routing::get, Json, Router};

async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Server is running"))
}

async fn ping_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("pong"))
}

pub fn system_router() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health_assistant/ping", get(ping_handler))
}
