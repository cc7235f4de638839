use std::sync::atomic::Ordering;

use axum::{Json, extract::State};
use serde_json::json;
use tokio::time::{Duration, timeout};

use crate::SharedState;
use crate::error::ApiError;

const READINESS_TIMEOUT: Duration = Duration::from_secs(1);

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    let client = timeout(READINESS_TIMEOUT, state.store.pool().get())
        .await
        .map_err(|_| ApiError::ServiceUnavailable("db_pool_timeout".into()))?
        .map_err(|err| ApiError::ServiceUnavailable(format!("db_pool_unavailable: {err}")))?;

    timeout(READINESS_TIMEOUT, client.simple_query("SELECT 1"))
        .await
        .map_err(|_| ApiError::ServiceUnavailable("db_ping_timeout".into()))?
        .map_err(|err| ApiError::ServiceUnavailable(format!("db_ping_failed: {err}")))?;

    Ok(Json(json!({
        "status": "ok",
        "database": "ok",
        "application": env!("CARGO_PKG_NAME"),
    })))
}
