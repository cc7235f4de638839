use serde::Serialize;
use tracing::{debug, instrument};

use crate::catalog::{CareerDomain, CoreSkill, EducationLevel};
use crate::error::CoreError;
use crate::store::LearningStore;
use crate::{Course, Learner};

use super::vector::{FeatureVector, SkillSlots};

const NEUTRAL_EDUCATION: f64 = 0.5;
const LEARNER_NEUTRAL_DOMAIN: f64 = 0.5;
// Courses without a domain sit at quarter scale, unlike learners (0.5).
const COURSE_DEFAULT_DOMAIN: f64 = 0.25;
const PROJECT_SATURATION: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LearnerFeatures {
    /// Comparable with course vectors; `context` holds the project score.
    pub vector: FeatureVector,
    /// Career-path domain score. Not part of the compared vector.
    pub domain_affinity: f64,
}

fn education_score(level: Option<EducationLevel>) -> f64 {
    level
        .map(|level| f64::from(level.rank()) / f64::from(EducationLevel::TIERS))
        .unwrap_or(NEUTRAL_EDUCATION)
}

fn domain_score(domain: Option<CareerDomain>, default: f64) -> f64 {
    domain
        .and_then(CareerDomain::rank)
        .map(|rank| f64::from(rank) / f64::from(CareerDomain::TIERS))
        .unwrap_or(default)
}

fn project_score(project_count: u32) -> f64 {
    (f64::from(project_count) / PROJECT_SATURATION).min(1.0)
}

pub fn learner_features(learner: &Learner) -> LearnerFeatures {
    let skills = SkillSlots::from_fn(|core| {
        learner
            .skills
            .iter()
            .find(|owned| core.matches(&owned.name))
            .map(|owned| f64::from(owned.level.min(100)) / 100.0)
            .unwrap_or(0.0)
    });

    let career_domain = learner.career_path.as_ref().and_then(|path| path.domain);

    LearnerFeatures {
        vector: FeatureVector {
            education: education_score(learner.education_level),
            skills,
            context: project_score(learner.project_count),
        },
        domain_affinity: domain_score(career_domain, LEARNER_NEUTRAL_DOMAIN),
    }
}

fn course_teaches(course: &Course, core: CoreSkill) -> bool {
    course
        .skills
        .iter()
        .chain(course.tags.iter())
        .any(|name| core.matches(name))
}

pub fn course_vector(course: &Course) -> FeatureVector {
    FeatureVector {
        education: education_score(course.education_level),
        skills: SkillSlots::from_fn(|core| {
            if course_teaches(course, core) {
                1.0
            } else {
                0.0
            }
        }),
        context: domain_score(course.domain, COURSE_DEFAULT_DOMAIN),
    }
}

#[instrument(skip(store))]
pub async fn build_learner_vector<S: LearningStore>(
    store: &S,
    learner_id: i64,
) -> Result<LearnerFeatures, CoreError> {
    let learner = store
        .fetch_learner(learner_id)
        .await?
        .ok_or_else(|| CoreError::learner_not_found(learner_id))?;

    let features = learner_features(&learner);
    debug!(learner_id, skills = learner.skills.len(), "learner vector built");
    Ok(features)
}

#[instrument(skip(store))]
pub async fn build_course_vector<S: LearningStore>(
    store: &S,
    course_id: i64,
) -> Result<FeatureVector, CoreError> {
    let course = store
        .fetch_course(course_id)
        .await?
        .ok_or_else(|| CoreError::course_not_found(course_id))?;

    Ok(course_vector(&course))
}
