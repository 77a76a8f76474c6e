// src/domain/feedback_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::features::analytics::models::feedback_record::FeedbackRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    // 1〜5 の範囲チェックは集計エンジン側で行う
    pub rating: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,

    pub satisfied: bool,

    pub given_on: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::user_model::Entity",
        from = "Column::UserId",
        to = "crate::domain::user_model::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

// リレーション実装
impl Related<crate::domain::user_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            satisfied: Set(true),
            given_on: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

impl From<Model> for FeedbackRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            rating: model.rating,
            comment: model.comment,
            satisfied: model.satisfied,
            submitted_at: model.given_on,
        }
    }
}
