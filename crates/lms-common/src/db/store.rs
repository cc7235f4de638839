use std::collections::HashSet;

use crate::catalog::CareerDomain;
use crate::store::{LearningStore, StoreError};
use crate::{ActivityCounts, CareerPath, Course, Learner};

use super::{
    PgPool, fetch_activity_counts, fetch_career_path_by_domain, fetch_completed_course_domains,
    fetch_course, fetch_enrolled_course_ids, fetch_learner, fetch_published_courses,
};

/// [`LearningStore`] backed by the LMS Postgres schema.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl LearningStore for PgStore {
    async fn fetch_learner(&self, learner_id: i64) -> Result<Option<Learner>, StoreError> {
        fetch_learner(&self.pool, learner_id).await
    }

    async fn fetch_course(&self, course_id: i64) -> Result<Option<Course>, StoreError> {
        fetch_course(&self.pool, course_id).await
    }

    async fn list_published_courses(&self) -> Result<Vec<Course>, StoreError> {
        fetch_published_courses(&self.pool).await
    }

    async fn enrolled_course_ids(&self, learner_id: i64) -> Result<HashSet<i64>, StoreError> {
        fetch_enrolled_course_ids(&self.pool, learner_id).await
    }

    async fn activity_counts(&self, learner_id: i64) -> Result<ActivityCounts, StoreError> {
        fetch_activity_counts(&self.pool, learner_id).await
    }

    async fn completed_course_domains(
        &self,
        learner_id: i64,
    ) -> Result<Vec<Option<CareerDomain>>, StoreError> {
        fetch_completed_course_domains(&self.pool, learner_id).await
    }

    async fn find_career_path_by_domain(
        &self,
        domain: CareerDomain,
    ) -> Result<Option<CareerPath>, StoreError> {
        fetch_career_path_by_domain(&self.pool, domain).await
    }
}
