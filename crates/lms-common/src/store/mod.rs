//! Read-only data access seam between the scoring core and storage.
//!
//! Every operation in the core re-reads what it needs through this trait on
//! each call; nothing fetched here is cached.

mod memory;

use std::collections::HashSet;
use std::future::Future;

use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::Error as PgError;

use crate::catalog::CareerDomain;
use crate::{ActivityCounts, CareerPath, Course, Learner};

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

pub trait LearningStore: Send + Sync {
    /// Learner with skills, project count and linked career path.
    fn fetch_learner(
        &self,
        learner_id: i64,
    ) -> impl Future<Output = Result<Option<Learner>, StoreError>> + Send;

    fn fetch_course(
        &self,
        course_id: i64,
    ) -> impl Future<Output = Result<Option<Course>, StoreError>> + Send;

    /// Published courses in creation order.
    fn list_published_courses(
        &self,
    ) -> impl Future<Output = Result<Vec<Course>, StoreError>> + Send;

    fn enrolled_course_ids(
        &self,
        learner_id: i64,
    ) -> impl Future<Output = Result<HashSet<i64>, StoreError>> + Send;

    fn activity_counts(
        &self,
        learner_id: i64,
    ) -> impl Future<Output = Result<ActivityCounts, StoreError>> + Send;

    /// Domain of each course the learner holds a certificate for.
    fn completed_course_domains(
        &self,
        learner_id: i64,
    ) -> impl Future<Output = Result<Vec<Option<CareerDomain>>, StoreError>> + Send;

    /// Any career path tagged with `domain` (lowest id first).
    fn find_career_path_by_domain(
        &self,
        domain: CareerDomain,
    ) -> impl Future<Output = Result<Option<CareerPath>, StoreError>> + Send;
}
