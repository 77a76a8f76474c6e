// feedback-backend/src/api/mod.rs
use crate::features::analytics::handlers::{analytics_router, system_router};
use crate::features::analytics::models::TrendWindow;
use crate::features::analytics::services::{AnalyticsService, FeedbackService};
use crate::logging::request_logging;
use crate::middleware::cors_layer;
use crate::repository::FeedbackSource;
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<AnalyticsService>,
    pub feedback_service: Arc<FeedbackService>,
}

impl AppState {
    /// 同じレコードソースを共有するサービス群を構築
    pub fn new(source: Arc<dyn FeedbackSource>, default_window: TrendWindow) -> Self {
        Self {
            analytics_service: Arc::new(AnalyticsService::new(source.clone(), default_window)),
            feedback_service: Arc::new(FeedbackService::new(source)),
        }
    }
}

/// 全ルートとミドルウェアを組み立てたルーター
pub fn create_app(app_state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(system_router())
        .merge(analytics_router(app_state))
        .layer(middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
}
