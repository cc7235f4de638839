//! Behavioral insights: engagement, skill growth, career alignment and
//! consistency, combined into a career readiness score once the learner has
//! enough activity to unlock them.

pub mod feedback;
pub mod scores;
pub mod unlock;
pub mod weights;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::api::insights::{
    CareerAlignment, CareerInsights, CareerReadiness, InsightCourse, InsightFeedback,
    ReadinessStatus, SubScore,
};
use crate::catalog::infer_domain_from_focus;
use crate::error::CoreError;
use crate::store::LearningStore;
use crate::{ActivityCounts, CareerPath, Course, Learner};

pub const MAX_INSIGHT_COURSES: usize = 3;

/// Explicit career path first, then a path inferred from the free-text focus.
#[instrument(skip(store, learner), fields(learner_id = learner.id))]
pub async fn resolve_career_path<S: LearningStore>(
    store: &S,
    learner: &Learner,
) -> Result<Option<CareerPath>, CoreError> {
    if let Some(path) = &learner.career_path {
        return Ok(Some(path.clone()));
    }

    let Some(domain) = learner
        .career_focus_id
        .as_deref()
        .and_then(infer_domain_from_focus)
    else {
        return Ok(None);
    };

    debug!(domain = domain.as_ref(), "career path inferred from focus");
    Ok(store.find_career_path_by_domain(domain).await?)
}

/// Published, not-enrolled courses that teach a missing skill. No scoring.
pub fn courses_for_missing_skills(
    courses: &[Course],
    enrolled: &std::collections::HashSet<i64>,
    missing_skills: &[String],
) -> Vec<InsightCourse> {
    if missing_skills.is_empty() {
        return Vec::new();
    }

    courses
        .iter()
        .filter(|course| course.is_published && !enrolled.contains(&course.id))
        .filter_map(|course| {
            let covered: Vec<&str> = missing_skills
                .iter()
                .filter(|skill| course.covers_skill(skill))
                .map(String::as_str)
                .collect();

            if covered.is_empty() {
                return None;
            }

            let topics = if course.tags.is_empty() {
                covered.join(", ")
            } else {
                course.tags.join(", ")
            };

            Some(InsightCourse {
                course_id: course.id,
                title: course.title.clone(),
                reason: format!("Helps you gain skills in: {topics}"),
            })
        })
        .take(MAX_INSIGHT_COURSES)
        .collect()
}

fn locked_insights(learner_id: i64, counts: ActivityCounts) -> CareerInsights {
    CareerInsights {
        learner_id,
        is_unlocked: false,
        progress: unlock::progress(counts),
        message: unlock::locked_message(counts),
        career_readiness: CareerReadiness {
            score: 0,
            status: ReadinessStatus::Locked,
        },
        engagement: SubScore::locked(),
        skill_growth: SubScore::locked(),
        career_alignment: CareerAlignment::locked(),
        consistency: SubScore::locked(),
        feedback: InsightFeedback::default(),
        recommended_courses: Vec::new(),
        generated_at: Utc::now(),
    }
}

/// Returns `None` when the learner does not exist.
#[instrument(skip(store))]
pub async fn get_insights<S: LearningStore>(
    store: &S,
    learner_id: i64,
) -> Result<Option<CareerInsights>, CoreError> {
    let Some(learner) = store.fetch_learner(learner_id).await? else {
        return Ok(None);
    };

    let counts = store.activity_counts(learner_id).await?;
    if !unlock::is_unlocked(counts) {
        debug!(
            learner_id,
            enrolled = counts.enrolled,
            completed = counts.completed,
            "insights locked"
        );
        return Ok(Some(locked_insights(learner_id, counts)));
    }

    let engagement = scores::engagement(counts);
    let skill_growth = scores::skill_growth(scores::distinct_skill_count(&learner));

    let career_path = resolve_career_path(store, &learner).await?;
    let career_alignment = scores::career_alignment(&learner, career_path.as_ref());

    let completed_domains = store.completed_course_domains(learner_id).await?;
    let consistency = scores::consistency(counts.completed, &completed_domains);

    let career_readiness = scores::career_readiness(
        engagement.score,
        skill_growth.score,
        career_alignment.score,
        consistency.score,
    );

    let feedback = feedback::build_feedback(
        engagement.score,
        skill_growth.score,
        career_alignment.score,
        consistency.score,
    );

    let recommended_courses = if career_alignment.missing_skills.is_empty() {
        Vec::new()
    } else {
        let courses = store.list_published_courses().await?;
        let enrolled = store.enrolled_course_ids(learner_id).await?;
        courses_for_missing_skills(&courses, &enrolled, &career_alignment.missing_skills)
    };

    info!(
        learner_id,
        readiness = career_readiness.score,
        status = career_readiness.status.as_ref(),
        "insights computed"
    );

    Ok(Some(CareerInsights {
        learner_id,
        is_unlocked: true,
        progress: unlock::progress(counts),
        message: career_readiness.status.summary().to_string(),
        career_readiness,
        engagement,
        skill_growth,
        career_alignment,
        consistency,
        feedback,
        recommended_courses,
        generated_at: Utc::now(),
    }))
}
