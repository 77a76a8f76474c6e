use chrono::NaiveDate;
use std::collections::HashMap;

use super::aggregation::{validate_records, RatingAccumulator};
use crate::error::AppResult;
use crate::features::analytics::models::feedback_record::FeedbackRecord;
use crate::features::analytics::models::summary::{DailyTrend, TrendWindow};

/// 基準日までの直近 `window` 日分の日別件数と平均評価を日付昇順で返す。
///
/// 日付は `submitted_at` の UTC 暦日で判定する。期間外のレコードは無視する。
/// レコードが無い日も件数 0・平均 0 のエントリとして必ず含める。
pub fn compute_daily_trends(
    records: &[FeedbackRecord],
    window: TrendWindow,
    reference_date: NaiveDate,
) -> AppResult<Vec<DailyTrend>> {
    validate_records(records)?;
    let start = window.start_date(reference_date)?;

    let mut buckets: HashMap<NaiveDate, RatingAccumulator> = HashMap::new();
    for record in records {
        let day = record.submitted_on();
        if window.contains(reference_date, day) {
            buckets.entry(day).or_default().add(record.rating);
        }
    }

    let trends = start
        .iter_days()
        .take(window.days() as usize)
        .map(|date| {
            let bucket = buckets.get(&date).copied().unwrap_or_default();
            DailyTrend {
                date,
                count: bucket.count(),
                average_rating: bucket.average(),
            }
        })
        .collect();

    Ok(trends)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use chrono::{DateTime, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(day: NaiveDate, hour: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&day.and_hms_opt(hour, 30, 0).unwrap())
    }

    fn record(id: i32, rating: i32, submitted_at: DateTime<Utc>) -> FeedbackRecord {
        FeedbackRecord {
            id,
            rating,
            comment: Some(format!("comment {}", id)),
            satisfied: rating >= 3,
            submitted_at,
        }
    }

    #[test]
    fn test_three_day_window_with_gap() {
        let reference = date(2025, 6, 10);
        let records = vec![
            record(1, 4, at(date(2025, 6, 8), 9)),
            record(2, 2, at(reference, 1)),
            record(3, 4, at(reference, 23)),
        ];

        let trends =
            compute_daily_trends(&records, TrendWindow::new(3).unwrap(), reference).unwrap();

        assert_eq!(
            trends,
            vec![
                DailyTrend {
                    date: date(2025, 6, 8),
                    count: 1,
                    average_rating: 4.0
                },
                DailyTrend {
                    date: date(2025, 6, 9),
                    count: 0,
                    average_rating: 0.0
                },
                DailyTrend {
                    date: reference,
                    count: 2,
                    average_rating: 3.0
                },
            ]
        );
    }

    #[test]
    fn test_records_outside_window_are_ignored() {
        let reference = date(2025, 6, 10);
        let records = vec![
            record(1, 5, at(date(2025, 6, 3), 12)), // 期間の前日
            record(2, 1, at(date(2025, 6, 11), 0)), // 基準日の翌日
            record(3, 3, at(date(2025, 6, 4), 0)),
        ];

        let trends = compute_daily_trends(&records, TrendWindow::default(), reference).unwrap();

        assert_eq!(trends.len(), 7);
        assert_eq!(trends.first().unwrap().date, date(2025, 6, 4));
        assert_eq!(trends.last().unwrap().date, reference);
        assert_eq!(trends.iter().map(|t| t.count).sum::<u64>(), 1);
        assert_eq!(trends[0].average_rating, 3.0);
    }

    #[test]
    fn test_empty_snapshot_yields_full_zeroed_window() {
        let reference = date(2024, 3, 1);
        let trends =
            compute_daily_trends(&[], TrendWindow::new(30).unwrap(), reference).unwrap();

        assert_eq!(trends.len(), 30);
        assert!(trends
            .iter()
            .all(|t| t.count == 0 && t.average_rating == 0.0));
        // 閏年の2月を含めて連続した日付になる
        for pair in trends.windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
        assert_eq!(trends[0].date, date(2024, 2, 1));
    }

    #[test]
    fn test_window_before_calendar_start_is_rejected() {
        let reference = NaiveDate::MIN.succ_opt().unwrap();

        let result = compute_daily_trends(&[], TrendWindow::new(3).unwrap(), reference);

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        // 下限ちょうどに収まる期間は基準日で終わる
        let trends = compute_daily_trends(&[], TrendWindow::new(2).unwrap(), reference).unwrap();
        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].date, NaiveDate::MIN);
        assert_eq!(trends[1].date, reference);
    }

    #[test]
    fn test_trends_are_order_independent() {
        let reference = date(2025, 1, 31);
        let mut records: Vec<FeedbackRecord> = (0..40)
            .map(|i| {
                let day = date(2025, 1, 1 + (i % 31) as u32);
                record(i, (i % 5) + 1, at(day, (i % 24) as u32))
            })
            .collect();

        let window = TrendWindow::new(14).unwrap();
        let baseline = compute_daily_trends(&records, window, reference).unwrap();
        records.reverse();
        assert_eq!(
            compute_daily_trends(&records, window, reference).unwrap(),
            baseline
        );
    }

    #[test]
    fn test_invalid_rating_fails_trend_computation() {
        let reference = date(2025, 6, 10);
        let records = vec![record(8, 9, at(date(2025, 1, 1), 0))];

        let result = compute_daily_trends(&records, TrendWindow::default(), reference);

        assert!(matches!(
            result,
            Err(AppError::InvalidRating {
                record_id: 8,
                rating: 9
            })
        ));
    }
}
