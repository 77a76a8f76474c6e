pub mod feedback_record;
pub mod period;
pub mod summary;

pub use feedback_record::{FeedbackDetail, FeedbackRecord, NewFeedback};
pub use period::ReportingPeriod;
pub use summary::{AnalyticsSummary, DailyTrend, FeedbackStats, RatingDistribution, TrendWindow};
