use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// 集計対象となるフィードバック1件（読み取り専用のスナップショット要素）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub satisfied: bool,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// 投稿日（UTC の暦日）
    pub fn submitted_on(&self) -> NaiveDate {
        self.submitted_at.date_naive()
    }
}

/// 一覧表示用のフィードバック詳細（集計はしない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDetail {
    pub id: i32,
    pub user_id: i32,
    pub username: Option<String>,
    pub rating: i32,
    pub comment: Option<String>,
    pub satisfied: bool,
    pub given_on: DateTime<Utc>,
}

/// 投稿経路から保存されるフィードバック
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub user_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub satisfied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rating_bounds() {
        assert!(!is_valid_rating(0));
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(6));
        assert!(!is_valid_rating(-3));
    }

    #[test]
    fn test_submitted_on_uses_utc_calendar_day() {
        let record = FeedbackRecord {
            id: 1,
            rating: 4,
            comment: None,
            satisfied: true,
            submitted_at: Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 59).unwrap(),
        };

        assert_eq!(
            record.submitted_on(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
    }
}
