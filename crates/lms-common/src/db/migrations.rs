use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::Error as PgError;
use tracing::{info, instrument};

use crate::db::PgPool;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to run migration: {0}")]
    Postgres(#[from] PgError),
}

pub struct Migration {
    pub id: i32,
    pub description: &'static str,
    pub sql: &'static str,
}

/// Read schema the scoring core depends on. Every statement is idempotent so an
/// existing LMS database is left untouched.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        id: 1,
        description: "learners, skills and career paths",
        sql: r#"
CREATE TABLE IF NOT EXISTS lms.skills (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS lms.career_paths (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    domain TEXT
);

CREATE TABLE IF NOT EXISTS lms.career_path_skills (
    career_path_id BIGINT NOT NULL REFERENCES lms.career_paths(id) ON DELETE CASCADE,
    skill_id BIGINT NOT NULL REFERENCES lms.skills(id) ON DELETE CASCADE,
    position INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (career_path_id, skill_id)
);

CREATE TABLE IF NOT EXISTS lms.learners (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    education_level TEXT,
    career_path_id BIGINT REFERENCES lms.career_paths(id) ON DELETE SET NULL,
    career_focus_id TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS lms.learner_skills (
    id BIGSERIAL PRIMARY KEY,
    learner_id BIGINT NOT NULL REFERENCES lms.learners(id) ON DELETE CASCADE,
    skill_id BIGINT NOT NULL REFERENCES lms.skills(id) ON DELETE CASCADE,
    level INTEGER NOT NULL DEFAULT 0,
    UNIQUE (learner_id, skill_id),
    CONSTRAINT chk_learner_skill_level CHECK (level >= 0 AND level <= 100)
);

CREATE TABLE IF NOT EXISTS lms.learner_projects (
    id BIGSERIAL PRIMARY KEY,
    learner_id BIGINT NOT NULL REFERENCES lms.learners(id) ON DELETE CASCADE,
    title TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_career_paths_domain ON lms.career_paths(domain, id);
CREATE INDEX IF NOT EXISTS idx_learner_projects_learner ON lms.learner_projects(learner_id);
"#,
    },
    Migration {
        id: 2,
        description: "courses, enrollments and certificates",
        sql: r#"
CREATE TABLE IF NOT EXISTS lms.courses (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    education_level TEXT,
    domain TEXT,
    difficulty TEXT,
    tags TEXT[] NOT NULL DEFAULT '{}',
    has_project BOOLEAN NOT NULL DEFAULT false,
    thumbnail TEXT,
    is_published BOOLEAN NOT NULL DEFAULT false,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS lms.course_skills (
    course_id BIGINT NOT NULL REFERENCES lms.courses(id) ON DELETE CASCADE,
    skill_id BIGINT NOT NULL REFERENCES lms.skills(id) ON DELETE CASCADE,
    PRIMARY KEY (course_id, skill_id)
);

CREATE TABLE IF NOT EXISTS lms.enrollments (
    id BIGSERIAL PRIMARY KEY,
    learner_id BIGINT NOT NULL REFERENCES lms.learners(id) ON DELETE CASCADE,
    course_id BIGINT NOT NULL REFERENCES lms.courses(id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (learner_id, course_id)
);

CREATE TABLE IF NOT EXISTS lms.certificates (
    id BIGSERIAL PRIMARY KEY,
    learner_id BIGINT NOT NULL REFERENCES lms.learners(id) ON DELETE CASCADE,
    course_id BIGINT NOT NULL REFERENCES lms.courses(id) ON DELETE CASCADE,
    issued_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (learner_id, course_id)
);

CREATE INDEX IF NOT EXISTS idx_courses_published ON lms.courses(created_at, id) WHERE is_published;
CREATE INDEX IF NOT EXISTS idx_enrollments_learner ON lms.enrollments(learner_id);
CREATE INDEX IF NOT EXISTS idx_certificates_learner ON lms.certificates(learner_id);
"#,
    },
];

#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    let mut client = pool.get().await?;
    client
        .batch_execute(
            "CREATE SCHEMA IF NOT EXISTS lms;
             CREATE TABLE IF NOT EXISTS lms.schema_migrations (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
             );",
        )
        .await?;

    for migration in MIGRATIONS {
        let tx = client.transaction().await?;
        let applied = tx
            .query_opt(
                "SELECT 1 FROM lms.schema_migrations WHERE id = $1",
                &[&migration.id],
            )
            .await?
            .is_some();

        if applied {
            tx.rollback().await?;
            continue;
        }

        tx.batch_execute(migration.sql).await?;
        tx.execute(
            "INSERT INTO lms.schema_migrations (id, description) VALUES ($1, $2)",
            &[&migration.id, &migration.description],
        )
        .await?;
        tx.commit().await?;

        info!(
            migration_id = migration.id,
            description = migration.description,
            "migration applied"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_ids_are_sequential() {
        let ids: Vec<i32> = MIGRATIONS.iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=MIGRATIONS.len() as i32).collect::<Vec<_>>());
    }

    #[test]
    fn migrations_are_idempotent_ddl() {
        for migration in MIGRATIONS {
            for statement in migration.sql.split(';').map(str::trim) {
                if statement.is_empty() {
                    continue;
                }
                assert!(
                    statement.contains("IF NOT EXISTS"),
                    "non-idempotent statement in migration {}: {statement}",
                    migration.id
                );
            }
        }
    }
}
