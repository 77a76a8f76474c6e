// src/main.rs
use feedback_backend::api::{create_app, AppState};
use feedback_backend::config::Config;
use feedback_backend::db::{create_db_pool, ping};
use feedback_backend::logging::init_tracing;
use feedback_backend::repository::FeedbackRepository;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("Starting Feedback Backend server...");

    // 設定を読み込む
    let app_config = Config::from_env()?;
    tracing::info!(
        server_addr = %app_config.server_addr,
        trend_window_days = app_config.trend_window.days(),
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    ping(&db_pool).await?;
    tracing::info!("Database pool created successfully.");

    // 未適用のマイグレーションを実行
    Migrator::up(&db_pool, None).await?;
    tracing::info!("Database migrations applied.");

    let repository = Arc::new(FeedbackRepository::new(db_pool));
    let app_state = AppState::new(repository, app_config.trend_window);

    // ルーターの設定
    let app_router = create_app(app_state, &app_config.cors_allowed_origins);

    // サーバーの起動
    tracing::info!(
        "Router configured. Server listening on {}",
        app_config.server_addr
    );

    let listener = TcpListener::bind(&app_config.server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
