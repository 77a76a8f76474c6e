// src/features/analytics/handlers/analytics.rs
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::features::analytics::dto::{
    AnalyticsQuery, AnalyticsSummaryResponse, FeedbackDetailResponse, SubmitFeedbackRequest,
};
use crate::features::analytics::models::{ReportingPeriod, TrendWindow};
use crate::types::ApiResponse;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use tracing::info;

pub async fn get_analytics_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AnalyticsQuery>,
) -> AppResult<ApiResponse<AnalyticsSummaryResponse>> {
    let period = ReportingPeriod::new(query.start_date, query.end_date)?;
    let window = match query.window_days {
        Some(days) => TrendWindow::new(days)?,
        None => app_state.analytics_service.default_window(),
    };
    // 基準日はリクエスト境界でのみ決定し、集計処理には明示的に渡す
    let reference_date = query
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());

    info!(
        window_days = window.days(),
        reference_date = %reference_date,
        period = ?period,
        "Getting feedback analytics"
    );

    let summary = app_state
        .analytics_service
        .get_summary(period, window, reference_date)
        .await?;

    Ok(ApiResponse::success(summary.into()))
}

pub async fn list_feedback_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<FeedbackDetailResponse>>> {
    info!("Listing feedback details");

    let details = app_state.analytics_service.list_feedback().await?;

    Ok(ApiResponse::success(
        details
            .into_iter()
            .map(FeedbackDetailResponse::from)
            .collect(),
    ))
}

pub async fn submit_feedback_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SubmitFeedbackRequest>,
) -> AppResult<impl IntoResponse> {
    info!(user_id = payload.user_id, "Feedback submission received");

    let created = app_state.feedback_service.submit_feedback(payload).await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success(FeedbackDetailResponse::from(created)),
    ))
}

// --- Router Setup ---

pub fn analytics_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/health_assistant/feedback-analytics",
            get(get_analytics_handler),
        )
        .route("/health_assistant/feedback-details", get(list_feedback_handler))
        .route("/health_assistant/feedback", post(submit_feedback_handler))
        .with_state(app_state)
}
