use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::{borrow::Cow, future::Future};
use thiserror::Error;
use tracing::{error, warn};

use lms_common::error::CoreError;

tokio::task_local! {
    static REQUEST_ID: String;
}

fn sanitize_message(message: &str) -> String {
    const MAX_LEN: usize = 240;

    let cleaned = message
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .split_whitespace()
        .map(|token| {
            if token.contains("://") {
                "[redacted-url]".to_string()
            } else if token.starts_with('/') || token.contains('\\') {
                "[redacted-path]".to_string()
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.trim().is_empty() {
        return "unexpected error".to_string();
    }

    if cleaned.chars().count() > MAX_LEN {
        let mut truncated: String = cleaned.chars().take(MAX_LEN).collect();
        truncated.push_str("...");
        return truncated;
    }

    cleaned
}

pub async fn with_request_id<Fut, T>(request_id: Option<String>, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    match request_id {
        Some(request_id) => REQUEST_ID.scope(request_id, fut).await,
        None => fut.await,
    }
}

pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|value| value.clone()).ok()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("database error: {0}")]
    Database(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("too many requests: {0}")]
    TooManyRequests(String),
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
    request_id: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let code = self.code();
        let request_id = current_request_id();

        if status.is_server_error() {
            error!(
                code,
                status = %status,
                request_id = request_id.as_deref().unwrap_or(""),
                error = %self,
                "api_error"
            );
        } else {
            warn!(
                code,
                status = %status,
                request_id = request_id.as_deref().unwrap_or(""),
                error = %self,
                "api_error"
            );
        }

        let body = Json(ErrorResponse {
            code,
            message: self.public_message().into_owned(),
            request_id,
        });

        (status, body).into_response()
    }
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::TooManyRequests(_) => "too_many_requests",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::Database(_) => "database_error",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn public_message(&self) -> Cow<'static, str> {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => {
                Cow::Owned(sanitize_message(msg))
            }
            ApiError::TooManyRequests(_) => Cow::Borrowed("too many requests"),
            ApiError::ServiceUnavailable(msg) => Cow::Owned(sanitize_message(msg)),
            ApiError::Database(_) | ApiError::Internal(_) => Cow::Borrowed("internal server error"),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::NotFound { .. } => ApiError::NotFound(value.to_string()),
            CoreError::Store(err) => ApiError::Database(err.to_string()),
        }
    }
}
