// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マイグレーションモジュール
mod m20251016_000001_create_users_table;
mod m20251016_000002_create_feedback_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. ユーザーテーブル（依存関係なし）
            Box::new(m20251016_000001_create_users_table::Migration),
            // 2. フィードバックテーブル（usersテーブルに依存）
            Box::new(m20251016_000002_create_feedback_table::Migration),
        ]
    }
}
