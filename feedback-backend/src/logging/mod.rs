// src/logging/mod.rs

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

pub const DEFAULT_LOG_FILTER: &str = "feedback_backend=info,tower_http=info";

/// クライアントから受け取り、レスポンスにも返すリクエストIDのヘッダー
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// トレーシングの設定（RUST_LOG があればそちらを優先）
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(fmt::layer())
        .try_init();
}

/// 完了ログのレベル: 5xx は ERROR、4xx は WARN、それ以外は INFO
pub fn completion_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// 受け取ったリクエストIDが使えればそれを、なければ新しく採番する
fn request_id_for(req: &Request) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_string)
}

/// リクエスト単位のスパンを張り、完了時にステータスに応じたレベルで記録する。
///
/// ハンドラやサービス内のログはこのスパンの `request_id` 付きで出力される。
pub async fn request_logging(req: Request, next: Next) -> Response {
    let request_id = request_id_for(&req);
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    async move {
        let start = Instant::now();
        tracing::debug!("Request started");

        let mut response = next.run(req).await;
        let status = response.status();
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let level = completion_level(status);
        if level == Level::ERROR {
            tracing::error!(status = status.as_u16(), elapsed_ms, "Request failed");
        } else if level == Level::WARN {
            tracing::warn!(status = status.as_u16(), elapsed_ms, "Request rejected");
        } else {
            tracing::info!(status = status.as_u16(), elapsed_ms, "Request completed");
        }

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}
