// src/repository/feedback_repository.rs
use crate::db::DbPool;
use crate::domain::feedback_model::{self, ActiveModel as FeedbackActiveModel, Entity as FeedbackEntity};
use crate::domain::user_model::{self, Entity as UserEntity};
use crate::error::AppResult;
use crate::features::analytics::models::{
    FeedbackDetail, FeedbackRecord, NewFeedback, ReportingPeriod,
};
use crate::utils::error_helper::{not_found_error, retrieval_error};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{entity::*, query::*, Set};

/// フィードバックの取得元。
///
/// 分析処理はこのトレイト経由でスナップショットを受け取り、自身では I/O を行わない。
#[async_trait]
pub trait FeedbackSource: Send + Sync {
    /// 集計期間内のレコードを一度の読み取りで取得する
    async fn get_all_feedback(&self, period: ReportingPeriod) -> AppResult<Vec<FeedbackRecord>>;

    /// 一覧表示用の詳細（投稿者名付き）を取得する
    async fn list_feedback_details(&self) -> AppResult<Vec<FeedbackDetail>>;

    /// 新しいフィードバックを保存する。投稿者が存在しない場合は NotFound。
    async fn create_feedback(&self, feedback: NewFeedback) -> AppResult<FeedbackDetail>;
}

pub struct FeedbackRepository {
    db: DbPool,
}

impl FeedbackRepository {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn find_user(&self, user_id: i32) -> AppResult<Option<user_model::Model>> {
        Ok(UserEntity::find_by_id(user_id).one(&self.db).await?)
    }
}

fn to_detail(model: feedback_model::Model, username: Option<String>) -> FeedbackDetail {
    FeedbackDetail {
        id: model.id,
        user_id: model.user_id,
        username,
        rating: model.rating,
        comment: model.comment,
        satisfied: model.satisfied,
        given_on: model.given_on,
    }
}

#[async_trait]
impl FeedbackSource for FeedbackRepository {
    async fn get_all_feedback(&self, period: ReportingPeriod) -> AppResult<Vec<FeedbackRecord>> {
        let mut query = FeedbackEntity::find();
        if let Some(start) = period.start() {
            query = query.filter(feedback_model::Column::GivenOn.gte(start));
        }
        if let Some(end) = period.end() {
            query = query.filter(feedback_model::Column::GivenOn.lte(end));
        }

        let models = query
            .order_by_asc(feedback_model::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| retrieval_error(e, "get_all_feedback"))?;

        Ok(models.into_iter().map(FeedbackRecord::from).collect())
    }

    async fn list_feedback_details(&self) -> AppResult<Vec<FeedbackDetail>> {
        let rows = FeedbackEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(feedback_model::Column::GivenOn)
            .order_by_desc(feedback_model::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| retrieval_error(e, "list_feedback_details"))?;

        Ok(rows
            .into_iter()
            .map(|(feedback, user)| to_detail(feedback, user.map(|u| u.name)))
            .collect())
    }

    async fn create_feedback(&self, feedback: NewFeedback) -> AppResult<FeedbackDetail> {
        let user = self
            .find_user(feedback.user_id)
            .await?
            .ok_or_else(|| {
                not_found_error("User", &feedback.user_id.to_string(), "create_feedback")
            })?;

        let active_model = FeedbackActiveModel {
            user_id: Set(feedback.user_id),
            rating: Set(feedback.rating),
            comment: Set(feedback.comment),
            satisfied: Set(feedback.satisfied),
            given_on: Set(Utc::now()),
            ..ActiveModelTrait::default()
        };

        let created = active_model.insert(&self.db).await?;
        Ok(to_detail(created, Some(user.name)))
    }
}
