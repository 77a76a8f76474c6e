use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

use super::summary::summarize;
use crate::error::AppResult;
use crate::features::analytics::models::{
    AnalyticsSummary, FeedbackDetail, ReportingPeriod, TrendWindow,
};
use crate::repository::FeedbackSource;

/// 取得 → 集計を束ねるサービス。集計自体は純粋関数に委ねる。
pub struct AnalyticsService {
    source: Arc<dyn FeedbackSource>,
    default_window: TrendWindow,
}

impl AnalyticsService {
    pub fn new(source: Arc<dyn FeedbackSource>, default_window: TrendWindow) -> Self {
        Self {
            source,
            default_window,
        }
    }

    pub fn default_window(&self) -> TrendWindow {
        self.default_window
    }

    pub async fn get_summary(
        &self,
        period: ReportingPeriod,
        window: TrendWindow,
        reference_date: NaiveDate,
    ) -> AppResult<AnalyticsSummary> {
        // 1回の読み取りで得たスナップショットから全項目を算出する
        let snapshot = self.source.get_all_feedback(period).await?;

        debug!(
            record_count = snapshot.len(),
            period = ?period,
            window_days = window.days(),
            reference_date = %reference_date,
            "Computing feedback analytics"
        );

        summarize(&snapshot, window, reference_date).inspect_err(|e| {
            warn!(error = %e, "Feedback snapshot rejected by analytics");
        })
    }

    /// 投稿日時の降順（同時刻は id の降順）で詳細一覧を返す
    pub async fn list_feedback(&self) -> AppResult<Vec<FeedbackDetail>> {
        let mut details = self.source.list_feedback_details().await?;
        details.sort_by(|a, b| {
            b.given_on
                .cmp(&a.given_on)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(details)
    }
}
