// tests/common/mod.rs
#![allow(dead_code)]

pub mod db;
pub mod request;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use feedback_backend::api::{create_app, AppState};
use feedback_backend::error::{AppError, AppResult};
use feedback_backend::features::analytics::models::{
    FeedbackDetail, FeedbackRecord, NewFeedback, ReportingPeriod, TrendWindow,
};
use feedback_backend::repository::FeedbackSource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Once};

// テスト環境の初期化を一度だけ実行
static INIT: Once = Once::new();

/// テスト環境を初期化
pub fn init_test_env() {
    INIT.call_once(|| {
        // テスト用のログ設定
        let _ = tracing_subscriber::fmt()
            .with_env_filter("feedback_backend=debug,tower_http=debug")
            .with_test_writer()
            .try_init();
    });
}

/// DB を使わずにレコードソースを差し替えるためのインメモリ実装
#[derive(Default)]
pub struct InMemoryFeedbackSource {
    users: Mutex<HashMap<i32, String>>,
    feedback: Mutex<Vec<FeedbackDetail>>,
    fail_reads: AtomicBool,
}

impl InMemoryFeedbackSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, id: i32, name: &str) -> Self {
        self.users.lock().unwrap().insert(id, name.to_string());
        self
    }

    /// 投稿日時を指定してフィードバックを直接追加する
    pub fn add_feedback(
        &self,
        user_id: i32,
        rating: i32,
        satisfied: bool,
        given_on: DateTime<Utc>,
    ) -> i32 {
        let username = self.users.lock().unwrap().get(&user_id).cloned();
        let mut feedback = self.feedback.lock().unwrap();
        let id = feedback.len() as i32 + 1;
        feedback.push(FeedbackDetail {
            id,
            user_id,
            username,
            rating,
            comment: None,
            satisfied,
            given_on,
        });
        id
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.feedback.lock().unwrap().len()
    }

    fn check_reads(&self) -> AppResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::RetrievalError(
                "simulated connection failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl FeedbackSource for InMemoryFeedbackSource {
    async fn get_all_feedback(&self, period: ReportingPeriod) -> AppResult<Vec<FeedbackRecord>> {
        self.check_reads()?;
        Ok(self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .filter(|detail| period.contains(detail.given_on))
            .map(|detail| FeedbackRecord {
                id: detail.id,
                rating: detail.rating,
                comment: detail.comment.clone(),
                satisfied: detail.satisfied,
                submitted_at: detail.given_on,
            })
            .collect())
    }

    async fn list_feedback_details(&self) -> AppResult<Vec<FeedbackDetail>> {
        self.check_reads()?;
        // 並び順は保存順のまま返す（ソートはサービス側の責務）
        Ok(self.feedback.lock().unwrap().clone())
    }

    async fn create_feedback(&self, feedback: NewFeedback) -> AppResult<FeedbackDetail> {
        let username = self
            .users
            .lock()
            .unwrap()
            .get(&feedback.user_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", feedback.user_id)))?;

        let mut stored = self.feedback.lock().unwrap();
        let detail = FeedbackDetail {
            id: stored.len() as i32 + 1,
            user_id: feedback.user_id,
            username: Some(username),
            rating: feedback.rating,
            comment: feedback.comment,
            satisfied: feedback.satisfied,
            given_on: Utc::now(),
        };
        stored.push(detail.clone());
        Ok(detail)
    }
}

/// インメモリのソースでアプリ全体を構築
pub fn setup_app(source: Arc<InMemoryFeedbackSource>) -> axum::Router {
    init_test_env();
    let state = AppState::new(source, TrendWindow::default());
    create_app(state, &["http://localhost:3000".to_string()])
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap()
}
