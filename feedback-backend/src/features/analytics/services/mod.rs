pub mod aggregation;
pub mod analytics;
pub mod feedback;
pub mod summary;
pub mod trend;

pub use aggregation::compute_summary;
pub use analytics::AnalyticsService;
pub use feedback::FeedbackService;
pub use summary::summarize;
pub use trend::compute_daily_trends;
