use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::analytics::models::summary::MAX_TREND_WINDOW_DAYS;

pub const COMMENT_MAX_LENGTH: u64 = 2000;

/// `GET /health_assistant/feedback-analytics` のクエリパラメータ
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
pub struct AnalyticsQuery {
    #[validate(range(
        min = 1,
        max = MAX_TREND_WINDOW_DAYS,
        message = "window_days must be between 1 and 366"
    ))]
    pub window_days: Option<u32>,

    /// トレンドの基準日 (YYYY-MM-DD)。省略時は UTC の当日
    pub reference_date: Option<NaiveDate>,

    /// 集計期間 (RFC 3339、両端を含む)
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

fn default_satisfied() -> bool {
    true
}

/// `POST /health_assistant/feedback` のリクエストボディ
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct SubmitFeedbackRequest {
    #[validate(range(min = 1, message = "User id must be a positive integer"))]
    pub user_id: i32,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(length(
        max = COMMENT_MAX_LENGTH,
        message = "Comment must not exceed 2000 characters"
    ))]
    pub comment: Option<String>,

    #[serde(default = "default_satisfied")]
    pub satisfied: bool,
}
