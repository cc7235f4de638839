use tokio_postgres::Row;
use tracing::instrument;

use crate::catalog::{CareerDomain, EducationLevel, parse_optional};
use crate::db::util::{count_column, timed_query, timed_query_opt};
use crate::db::PgPool;
use crate::store::StoreError;
use crate::{CareerPath, Learner, LearnerSkill};

const LEARNER_SQL: &str = "SELECT \
        l.id, \
        l.name, \
        l.education_level, \
        l.career_focus_id, \
        (SELECT COUNT(*) FROM lms.learner_projects p WHERE p.learner_id = l.id) AS project_count, \
        cp.id AS career_path_id, \
        cp.title AS career_path_title, \
        cp.domain AS career_path_domain, \
        COALESCE( \
            (SELECT array_agg(s.name ORDER BY cps.position, s.name) \
             FROM lms.career_path_skills cps \
             JOIN lms.skills s ON s.id = cps.skill_id \
             WHERE cps.career_path_id = cp.id), \
            '{}' \
        ) AS career_path_skills \
    FROM lms.learners l \
    LEFT JOIN lms.career_paths cp ON cp.id = l.career_path_id \
    WHERE l.id = $1";

// Insertion order decides which skill wins a core-skill substring match.
const LEARNER_SKILLS_SQL: &str = "SELECT s.name, ls.level \
    FROM lms.learner_skills ls \
    JOIN lms.skills s ON s.id = ls.skill_id \
    WHERE ls.learner_id = $1 \
    ORDER BY ls.id";

fn map_career_path(row: &Row) -> Option<CareerPath> {
    let id: Option<i64> = row.get("career_path_id");
    id.map(|id| CareerPath {
        id,
        title: row.get("career_path_title"),
        domain: parse_optional::<CareerDomain>("career_paths.domain", row.get("career_path_domain")),
        required_skills: row.get("career_path_skills"),
    })
}

fn map_learner(row: &Row, skills: Vec<LearnerSkill>) -> Learner {
    Learner {
        id: row.get("id"),
        name: row.get("name"),
        education_level: parse_optional::<EducationLevel>(
            "learners.education_level",
            row.get("education_level"),
        ),
        career_path: map_career_path(row),
        career_focus_id: row.get("career_focus_id"),
        skills,
        project_count: count_column(row, "project_count"),
    }
}

#[instrument(skip(pool))]
pub async fn fetch_learner(pool: &PgPool, learner_id: i64) -> Result<Option<Learner>, StoreError> {
    let client = pool.get().await?;

    let Some(row) = timed_query_opt(&client, LEARNER_SQL, &[&learner_id], "fetch_learner").await?
    else {
        return Ok(None);
    };

    let skills = timed_query(&client, LEARNER_SKILLS_SQL, &[&learner_id], "fetch_learner_skills")
        .await?
        .iter()
        .map(|row| LearnerSkill::new(row.get::<_, String>("name"), row.get::<_, i32>("level")))
        .collect();

    Ok(Some(map_learner(&row, skills)))
}
