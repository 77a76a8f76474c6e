use crate::error::{AppError, AppResult};
use crate::features::analytics::models::feedback_record::{is_valid_rating, FeedbackRecord};
use crate::features::analytics::models::summary::{FeedbackStats, RatingDistribution};

/// 件数と評価合計の累積。平均は件数 0 のとき 0 とする。
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RatingAccumulator {
    count: u64,
    sum: i64,
}

impl RatingAccumulator {
    pub(crate) fn add(&mut self, rating: i32) {
        self.count += 1;
        self.sum += i64::from(rating);
    }

    pub(crate) fn count(&self) -> u64 {
        self.count
    }

    pub(crate) fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

/// 評価が 1〜5 の範囲外のレコードがあれば失敗させる。
///
/// 複数ある場合は入力順に依存しないよう、id が最小のものを報告する。
pub fn validate_records(records: &[FeedbackRecord]) -> AppResult<()> {
    match records
        .iter()
        .filter(|record| !is_valid_rating(record.rating))
        .min_by_key(|record| record.id)
    {
        Some(invalid) => Err(AppError::InvalidRating {
            record_id: invalid.id,
            rating: invalid.rating,
        }),
        None => Ok(()),
    }
}

/// 満足度（%）を四捨五入した整数で返す。件数 0 のときは 0。
pub fn satisfaction_rate(satisfied: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    // round(100 * satisfied / total) を整数演算で行う (round-half-up)
    let rate = (satisfied * 200 + total) / (total * 2);
    u32::try_from(rate.min(100)).unwrap_or(100)
}

/// スナップショットから総件数・平均評価・満足度・評価分布を算出する
pub fn compute_summary(records: &[FeedbackRecord]) -> AppResult<FeedbackStats> {
    validate_records(records)?;

    let mut ratings = RatingAccumulator::default();
    let mut distribution = RatingDistribution::default();
    let mut satisfied = 0u64;

    for record in records {
        ratings.add(record.rating);
        distribution.record(record.rating);
        if record.satisfied {
            satisfied += 1;
        }
    }

    Ok(FeedbackStats {
        total_feedback: ratings.count(),
        average_rating: ratings.average(),
        satisfaction_rate: satisfaction_rate(satisfied, ratings.count()),
        rating_distribution: distribution,
    })
}
