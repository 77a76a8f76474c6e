use chrono::NaiveDate;

use super::aggregation::compute_summary;
use super::trend::compute_daily_trends;
use crate::error::AppResult;
use crate::features::analytics::models::feedback_record::FeedbackRecord;
use crate::features::analytics::models::summary::{AnalyticsSummary, TrendWindow};

/// 同一スナップショットから統計とトレンドを算出してまとめる。
/// どちらかが失敗した場合は部分的な結果を返さない。
pub fn summarize(
    records: &[FeedbackRecord],
    window: TrendWindow,
    reference_date: NaiveDate,
) -> AppResult<AnalyticsSummary> {
    let stats = compute_summary(records)?;
    let daily_trends = compute_daily_trends(records, window, reference_date)?;
    Ok(AnalyticsSummary::compose(stats, daily_trends))
}
