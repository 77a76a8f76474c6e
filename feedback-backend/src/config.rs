// src/config.rs
use crate::features::analytics::models::summary::{TrendWindow, MAX_TREND_WINDOW_DAYS};
use dotenvy::dotenv;
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub cors_allowed_origins: Vec<String>,
    pub trend_window: TrendWindow,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 環境変数の参照元を差し替えられるようにした読み込み処理
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let trend_window = match lookup("TREND_WINDOW_DAYS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|days| TrendWindow::new(days).ok())
                .ok_or(ConfigError::Invalid {
                    key: "TREND_WINDOW_DAYS",
                    value: format!("{} (expected 1..={})", value, MAX_TREND_WINDOW_DAYS),
                })?,
            None => TrendWindow::default(),
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: "DB_MAX_CONNECTIONS",
                    value,
                })?,
            None => 10,
        };

        Ok(Config {
            database_url,
            server_addr,
            cors_allowed_origins,
            trend_window,
            db_max_connections,
        })
    }
}
