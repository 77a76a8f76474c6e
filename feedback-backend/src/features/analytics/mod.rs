//! フィードバック分析機能
//!
//! 投稿されたフィードバックのスナップショットから、総件数・平均評価・満足度・
//! 評価分布・日別トレンドを算出する。集計処理 (`services::aggregation`,
//! `services::trend`) は I/O を持たない純粋関数で、取得はサービス層が担う。

pub mod dto;
pub mod handlers;
pub mod models;
pub mod services;
