use std::sync::OnceLock;
use std::time::Instant;

use deadpool_postgres::Client;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Error as PgError, Row};
use tracing::warn;

fn slow_query_threshold_ms() -> Option<u64> {
    static CACHE: OnceLock<Option<u64>> = OnceLock::new();

    *CACHE.get_or_init(|| parse_threshold(std::env::var("LMS_DB_LOG_MIN_DURATION_MS").ok()))
}

fn parse_threshold(raw: Option<String>) -> Option<u64> {
    raw.and_then(|raw| raw.trim().parse::<i64>().ok())
        .map(|v| v.max(0) as u64)
        .filter(|v| *v > 0)
}

fn log_if_slow(label: &str, started_at: Instant) {
    if let Some(threshold_ms) = slow_query_threshold_ms() {
        let elapsed_ms = started_at.elapsed().as_millis() as u64;
        if elapsed_ms >= threshold_ms {
            warn!(query = label, elapsed_ms, "slow_query_detected");
        }
    }
}

/// Prepared (cached) query with slow-query logging.
pub async fn timed_query(
    client: &Client,
    statement: &str,
    params: &[&(dyn ToSql + Sync)],
    label: &str,
) -> Result<Vec<Row>, PgError> {
    let started = Instant::now();
    let prepared = client.prepare_cached(statement).await?;
    let result = client.query(&prepared, params).await;
    log_if_slow(label, started);
    result
}

pub async fn timed_query_opt(
    client: &Client,
    statement: &str,
    params: &[&(dyn ToSql + Sync)],
    label: &str,
) -> Result<Option<Row>, PgError> {
    let started = Instant::now();
    let prepared = client.prepare_cached(statement).await?;
    let result = client.query_opt(&prepared, params).await;
    log_if_slow(label, started);
    result
}

pub async fn timed_query_one(
    client: &Client,
    statement: &str,
    params: &[&(dyn ToSql + Sync)],
    label: &str,
) -> Result<Row, PgError> {
    let started = Instant::now();
    let prepared = client.prepare_cached(statement).await?;
    let result = client.query_one(&prepared, params).await;
    log_if_slow(label, started);
    result
}

/// Non-negative count column as `u32`.
pub fn count_column(row: &Row, column: &str) -> u32 {
    row.get::<_, i64>(column).clamp(0, i64::from(u32::MAX)) as u32
}
