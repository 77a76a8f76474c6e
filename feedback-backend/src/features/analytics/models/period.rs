use chrono::{DateTime, Utc};

use crate::error::{AppError, AppResult};

/// 集計対象とする投稿日時の範囲（両端を含む）。未指定の端は無制限。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportingPeriod {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl ReportingPeriod {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> AppResult<Self> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(AppError::BadRequest(format!(
                    "start_date {} must not be after end_date {}",
                    start.to_rfc3339(),
                    end.to_rfc3339()
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// 全期間
    pub fn all() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| at >= start) && self.end.map_or(true, |end| at <= end)
    }
}
