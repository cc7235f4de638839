use tokio_postgres::Row;
use tracing::instrument;

use crate::catalog::{CareerDomain, Difficulty, EducationLevel, parse_optional};
use crate::db::util::{timed_query, timed_query_opt};
use crate::db::PgPool;
use crate::store::StoreError;
use crate::Course;

const COURSE_COLUMNS: &str = "c.id, \
        c.title, \
        c.education_level, \
        c.domain, \
        c.difficulty, \
        COALESCE(c.tags, '{}') AS tags, \
        c.has_project, \
        c.thumbnail, \
        c.is_published, \
        COALESCE( \
            (SELECT array_agg(s.name ORDER BY s.name) \
             FROM lms.course_skills cs \
             JOIN lms.skills s ON s.id = cs.skill_id \
             WHERE cs.course_id = c.id), \
            '{}' \
        ) AS skills";

fn map_course(row: &Row) -> Course {
    Course {
        id: row.get("id"),
        title: row.get("title"),
        education_level: parse_optional::<EducationLevel>(
            "courses.education_level",
            row.get("education_level"),
        ),
        domain: parse_optional::<CareerDomain>("courses.domain", row.get("domain")),
        skills: row.get("skills"),
        tags: row.get("tags"),
        difficulty: parse_optional::<Difficulty>("courses.difficulty", row.get("difficulty")),
        has_project: row.get("has_project"),
        thumbnail: row.get("thumbnail"),
        is_published: row.get("is_published"),
    }
}

#[instrument(skip(pool))]
pub async fn fetch_course(pool: &PgPool, course_id: i64) -> Result<Option<Course>, StoreError> {
    let client = pool.get().await?;
    let query = format!("SELECT {COURSE_COLUMNS} FROM lms.courses c WHERE c.id = $1");

    let row = timed_query_opt(&client, &query, &[&course_id], "fetch_course").await?;
    Ok(row.as_ref().map(map_course))
}

/// Published courses in creation order.
#[instrument(skip(pool))]
pub async fn fetch_published_courses(pool: &PgPool) -> Result<Vec<Course>, StoreError> {
    let client = pool.get().await?;
    let query = format!(
        "SELECT {COURSE_COLUMNS} FROM lms.courses c \
         WHERE c.is_published = true \
         ORDER BY c.created_at, c.id"
    );

    let rows = timed_query(&client, &query, &[], "fetch_published_courses").await?;
    Ok(rows.iter().map(map_course).collect())
}
