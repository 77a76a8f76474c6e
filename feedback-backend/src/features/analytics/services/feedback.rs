use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::error::AppResult;
use crate::features::analytics::dto::SubmitFeedbackRequest;
use crate::features::analytics::models::{FeedbackDetail, NewFeedback};
use crate::repository::FeedbackSource;
use crate::utils::error_helper::convert_validation_errors;

/// フィードバック投稿を受け付けるサービス
pub struct FeedbackService {
    source: Arc<dyn FeedbackSource>,
}

impl FeedbackService {
    pub fn new(source: Arc<dyn FeedbackSource>) -> Self {
        Self { source }
    }

    pub async fn submit_feedback(&self, payload: SubmitFeedbackRequest) -> AppResult<FeedbackDetail> {
        payload
            .validate()
            .map_err(|e| convert_validation_errors(e, "submit_feedback"))?;

        // 空白のみのコメントは未入力として扱う（それ以外は送信されたまま保存）
        let comment = payload.comment.filter(|c| !c.trim().is_empty());

        let created = self
            .source
            .create_feedback(NewFeedback {
                user_id: payload.user_id,
                rating: payload.rating,
                comment,
                satisfied: payload.satisfied,
            })
            .await?;

        info!(
            feedback_id = created.id,
            user_id = created.user_id,
            rating = created.rating,
            "Feedback submitted successfully"
        );

        Ok(created)
    }
}
