pub mod requests;
pub mod responses;

pub use requests::{AnalyticsQuery, SubmitFeedbackRequest};
pub use responses::{
    AnalyticsSummaryResponse, DailyTrendResponse, FeedbackDetailResponse, MessageResponse,
};
