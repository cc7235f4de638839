use std::collections::HashSet;

use tracing::instrument;

use crate::catalog::{CareerDomain, parse_optional};
use crate::db::util::{count_column, timed_query, timed_query_one};
use crate::db::PgPool;
use crate::store::StoreError;
use crate::ActivityCounts;

#[instrument(skip(pool))]
pub async fn fetch_enrolled_course_ids(
    pool: &PgPool,
    learner_id: i64,
) -> Result<HashSet<i64>, StoreError> {
    let client = pool.get().await?;
    let rows = timed_query(
        &client,
        "SELECT course_id FROM lms.enrollments WHERE learner_id = $1",
        &[&learner_id],
        "fetch_enrolled_course_ids",
    )
    .await?;

    Ok(rows.iter().map(|row| row.get::<_, i64>("course_id")).collect())
}

#[instrument(skip(pool))]
pub async fn fetch_activity_counts(
    pool: &PgPool,
    learner_id: i64,
) -> Result<ActivityCounts, StoreError> {
    let client = pool.get().await?;
    let row = timed_query_one(
        &client,
        "SELECT \
            (SELECT COUNT(*) FROM lms.enrollments WHERE learner_id = $1) AS enrolled, \
            (SELECT COUNT(*) FROM lms.certificates WHERE learner_id = $1) AS completed",
        &[&learner_id],
        "fetch_activity_counts",
    )
    .await?;

    Ok(ActivityCounts {
        enrolled: count_column(&row, "enrolled"),
        completed: count_column(&row, "completed"),
    })
}

#[instrument(skip(pool))]
pub async fn fetch_completed_course_domains(
    pool: &PgPool,
    learner_id: i64,
) -> Result<Vec<Option<CareerDomain>>, StoreError> {
    let client = pool.get().await?;
    let rows = timed_query(
        &client,
        "SELECT c.domain \
         FROM lms.certificates cert \
         JOIN lms.courses c ON c.id = cert.course_id \
         WHERE cert.learner_id = $1",
        &[&learner_id],
        "fetch_completed_course_domains",
    )
    .await?;

    Ok(rows
        .iter()
        .map(|row| parse_optional::<CareerDomain>("courses.domain", row.get("domain")))
        .collect())
}
