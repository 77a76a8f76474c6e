use chrono::{Days, NaiveDate};

use super::feedback_record::{MAX_RATING, MIN_RATING};
use crate::error::{AppError, AppResult};

pub const DEFAULT_TREND_WINDOW_DAYS: u32 = 7;
pub const MAX_TREND_WINDOW_DAYS: u32 = 366;

/// 評価値 1〜5 ごとの件数。5 つのキーは常に存在する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RatingDistribution([u64; 5]);

impl RatingDistribution {
    fn slot(rating: i32) -> Option<usize> {
        if (MIN_RATING..=MAX_RATING).contains(&rating) {
            usize::try_from(rating - MIN_RATING).ok()
        } else {
            None
        }
    }

    pub fn record(&mut self, rating: i32) {
        if let Some(index) = Self::slot(rating) {
            self.0[index] += 1;
        }
    }

    pub fn count(&self, rating: i32) -> u64 {
        Self::slot(rating).map_or(0, |index| self.0[index])
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// (評価値, 件数) を評価値の昇順で返す
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        (MIN_RATING..=MAX_RATING).zip(self.0.iter().copied())
    }
}

/// トレンド期間内の1日分
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTrend {
    pub date: NaiveDate,
    pub count: u64,
    pub average_rating: f64,
}

/// 集計エンジンが返すスカラー統計と評価分布
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackStats {
    pub total_feedback: u64,
    pub average_rating: f64,
    pub satisfaction_rate: u32,
    pub rating_distribution: RatingDistribution,
}

/// ダッシュボードに返す集計結果一式
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total_feedback: u64,
    pub average_rating: f64,
    pub satisfaction_rate: u32,
    pub rating_distribution: RatingDistribution,
    pub daily_trends: Vec<DailyTrend>,
}

impl AnalyticsSummary {
    /// 統計とトレンドを組み合わせる。値の丸めや加工は行わない。
    pub fn compose(stats: FeedbackStats, daily_trends: Vec<DailyTrend>) -> Self {
        Self {
            total_feedback: stats.total_feedback,
            average_rating: stats.average_rating,
            satisfaction_rate: stats.satisfaction_rate,
            rating_distribution: stats.rating_distribution,
            daily_trends,
        }
    }
}

/// 日別トレンドの対象日数 (1..=366)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendWindow(u32);

impl TrendWindow {
    pub fn new(days: u32) -> AppResult<Self> {
        if !(1..=MAX_TREND_WINDOW_DAYS).contains(&days) {
            return Err(AppError::BadRequest(format!(
                "window_days must be between 1 and {}, got {}",
                MAX_TREND_WINDOW_DAYS, days
            )));
        }
        Ok(Self(days))
    }

    pub fn days(self) -> u32 {
        self.0
    }

    /// 基準日を含む期間の初日。暦の下限を越える場合は期間を縮めずにエラーとする。
    pub fn start_date(self, reference_date: NaiveDate) -> AppResult<NaiveDate> {
        reference_date
            .checked_sub_days(Days::new(u64::from(self.0 - 1)))
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "reference_date {} is too early for a {}-day window",
                    reference_date, self.0
                ))
            })
    }

    pub fn contains(self, reference_date: NaiveDate, date: NaiveDate) -> bool {
        let offset = reference_date.signed_duration_since(date).num_days();
        (0..i64::from(self.0)).contains(&offset)
    }
}

impl Default for TrendWindow {
    fn default() -> Self {
        Self(DEFAULT_TREND_WINDOW_DAYS)
    }
}
