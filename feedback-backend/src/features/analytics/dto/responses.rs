use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::features::analytics::models::{AnalyticsSummary, DailyTrend, FeedbackDetail};

// --- Analytics summary ---

/// ダッシュボードへ返す集計結果。フィールド名と型はここでのみ定義する。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyticsSummaryResponse {
    pub total_feedback: u64,
    pub average_rating: f64,
    pub satisfaction_rate: u32,
    /// 評価値 ("1"〜"5") → 件数
    pub rating_distribution: BTreeMap<i32, u64>,
    pub daily_trends: Vec<DailyTrendResponse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyTrendResponse {
    pub date: NaiveDate,
    pub count: u64,
    pub avg_rating: f64,
}

impl From<DailyTrend> for DailyTrendResponse {
    fn from(trend: DailyTrend) -> Self {
        Self {
            date: trend.date,
            count: trend.count,
            avg_rating: trend.average_rating,
        }
    }
}

impl From<AnalyticsSummary> for AnalyticsSummaryResponse {
    fn from(summary: AnalyticsSummary) -> Self {
        Self {
            total_feedback: summary.total_feedback,
            average_rating: summary.average_rating,
            satisfaction_rate: summary.satisfaction_rate,
            rating_distribution: summary.rating_distribution.iter().collect(),
            daily_trends: summary
                .daily_trends
                .into_iter()
                .map(DailyTrendResponse::from)
                .collect(),
        }
    }
}

// --- Feedback listing ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedbackDetailResponse {
    pub id: i32,
    pub user_id: i32,
    pub username: Option<String>,
    pub rating: i32,
    pub comment: Option<String>,
    pub satisfied: bool,
    pub given_on: DateTime<Utc>,
}

impl From<FeedbackDetail> for FeedbackDetailResponse {
    fn from(detail: FeedbackDetail) -> Self {
        Self {
            id: detail.id,
            user_id: detail.user_id,
            username: detail.username,
            rating: detail.rating,
            comment: detail.comment,
            satisfied: detail.satisfied,
            given_on: detail.given_on,
        }
    }
}

// --- System ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
