use crate::error::AppError;
use crate::utils::error_helper::convert_validation_errors;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Json, Query, Request,
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// serde のエラーメッセージからバッククォートで囲まれたフィールド名を取り出す
fn backticked_field(message: &str) -> Option<&str> {
    message.split('`').nth(1).filter(|field| !field.is_empty())
}

fn json_rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = rejection.body_text();
    match rejection {
        JsonRejection::JsonDataError(_) if message.contains("missing field") => {
            let detail = match backticked_field(&message) {
                Some(field) => format!("Missing required field '{}'", field),
                None => message.clone(),
            };
            AppError::BadRequest(detail)
        }
        JsonRejection::JsonDataError(_) => {
            AppError::BadRequest(format!("Invalid request body: {}", message))
        }
        JsonRejection::JsonSyntaxError(_) => {
            AppError::BadRequest("Request body is not valid JSON".to_string())
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::BadRequest("Expected request with `Content-Type: application/json`".to_string())
        }
        _ => AppError::BadRequest(message),
    }
}

fn query_rejection_to_error(rejection: QueryRejection) -> AppError {
    // 例: "Failed to deserialize query string: window_days: invalid digit found in string"
    let message = rejection.body_text();
    let detail = message
        .split_once(": ")
        .map_or(message.as_str(), |(_, detail)| detail);
    AppError::BadRequest(format!("Invalid query parameters: {}", detail))
}

/// JSON ボディを取り出して検証する Extractor
///
/// デシリアライズ失敗も検証失敗も `AppError` として統一されたエラーレスポンスになる。
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_error)?;

        value
            .validate()
            .map_err(|e| convert_validation_errors(e, &path))?;

        Ok(ValidatedJson(value))
    }
}

/// クエリ文字列を取り出して検証する Extractor
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_rejection_to_error)?;

        value
            .validate()
            .map_err(|e| convert_validation_errors(e, parts.uri.path()))?;

        Ok(ValidatedQuery(value))
    }
}
