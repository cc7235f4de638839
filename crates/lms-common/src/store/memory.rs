use std::collections::HashSet;

use crate::catalog::CareerDomain;
use crate::{ActivityCounts, CareerPath, Course, Learner};

use super::{LearningStore, StoreError};

/// In-process [`LearningStore`] over fixture data.
///
/// Course order is insertion order, mirroring creation order in Postgres.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    learners: Vec<Learner>,
    courses: Vec<Course>,
    career_paths: Vec<CareerPath>,
    enrollments: Vec<(i64, i64)>,
    certificates: Vec<(i64, i64)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_learner(mut self, learner: Learner) -> Self {
        self.learners.push(learner);
        self
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    pub fn with_career_path(mut self, career_path: CareerPath) -> Self {
        self.career_paths.push(career_path);
        self
    }

    pub fn with_enrollment(mut self, learner_id: i64, course_id: i64) -> Self {
        self.enrollments.push((learner_id, course_id));
        self
    }

    /// Marks a completion; does not imply an enrollment.
    pub fn with_certificate(mut self, learner_id: i64, course_id: i64) -> Self {
        self.certificates.push((learner_id, course_id));
        self
    }
}

impl LearningStore for MemoryStore {
    async fn fetch_learner(&self, learner_id: i64) -> Result<Option<Learner>, StoreError> {
        Ok(self
            .learners
            .iter()
            .find(|learner| learner.id == learner_id)
            .cloned())
    }

    async fn fetch_course(&self, course_id: i64) -> Result<Option<Course>, StoreError> {
        Ok(self
            .courses
            .iter()
            .find(|course| course.id == course_id)
            .cloned())
    }

    async fn list_published_courses(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self
            .courses
            .iter()
            .filter(|course| course.is_published)
            .cloned()
            .collect())
    }

    async fn enrolled_course_ids(&self, learner_id: i64) -> Result<HashSet<i64>, StoreError> {
        Ok(self
            .enrollments
            .iter()
            .filter(|(learner, _)| *learner == learner_id)
            .map(|(_, course)| *course)
            .collect())
    }

    async fn activity_counts(&self, learner_id: i64) -> Result<ActivityCounts, StoreError> {
        let count = |rows: &[(i64, i64)]| {
            rows.iter()
                .filter(|(learner, _)| *learner == learner_id)
                .count() as u32
        };

        Ok(ActivityCounts {
            enrolled: count(&self.enrollments),
            completed: count(&self.certificates),
        })
    }

    async fn completed_course_domains(
        &self,
        learner_id: i64,
    ) -> Result<Vec<Option<CareerDomain>>, StoreError> {
        Ok(self
            .certificates
            .iter()
            .filter(|(learner, _)| *learner == learner_id)
            .filter_map(|(_, course_id)| self.courses.iter().find(|c| c.id == *course_id))
            .map(|course| course.domain)
            .collect())
    }

    async fn find_career_path_by_domain(
        &self,
        domain: CareerDomain,
    ) -> Result<Option<CareerPath>, StoreError> {
        Ok(self
            .career_paths
            .iter()
            .filter(|path| path.domain == Some(domain))
            .min_by_key(|path| path.id)
            .cloned())
    }
}
