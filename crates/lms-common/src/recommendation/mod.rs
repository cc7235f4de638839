//! Similarity-ranked course recommendations and next-skill suggestions.

use tracing::{info, instrument};

use crate::api::recommendation::{CourseRecommendation, FocusSkill};
use crate::error::CoreError;
use crate::matching::{rank_courses, select_candidates};
use crate::store::LearningStore;
use crate::Learner;

pub const DEFAULT_LIMIT: usize = 10;

#[instrument(skip(store))]
pub async fn get_recommendations<S: LearningStore>(
    store: &S,
    learner_id: i64,
    limit: usize,
) -> Result<Vec<CourseRecommendation>, CoreError> {
    let learner = store
        .fetch_learner(learner_id)
        .await?
        .ok_or_else(|| CoreError::learner_not_found(learner_id))?;

    let courses = store.list_published_courses().await?;
    let enrolled = store.enrolled_course_ids(learner_id).await?;

    let published = courses.len();
    let candidates = select_candidates(&learner, courses, &enrolled);
    let eligible = candidates.len();

    let recommendations: Vec<CourseRecommendation> = rank_courses(&learner, candidates, limit)
        .into_iter()
        .map(CourseRecommendation::from)
        .collect();

    info!(
        learner_id,
        published,
        eligible,
        returned = recommendations.len(),
        "recommendations ranked"
    );

    Ok(recommendations)
}

/// Picks the next skill for the learner's declared career path.
///
/// Missing skills come first, in career-path order. When nothing is missing the
/// weakest required skill is suggested instead.
pub fn pick_focus_skill(learner: &Learner) -> Option<FocusSkill> {
    let path = learner.career_path.as_ref()?;

    if let Some(missing) = path
        .required_skills
        .iter()
        .find(|skill| !learner.has_skill(skill))
    {
        return Some(FocusSkill {
            skill: missing.clone(),
            reason: format!(
                "{missing} is required for the {} path and is not in your profile yet",
                path.title
            ),
        });
    }

    path.required_skills
        .iter()
        .filter_map(|skill| learner.proficiency_of(skill).map(|level| (skill, level)))
        .min_by_key(|(_, level)| *level)
        .map(|(skill, level)| FocusSkill {
            skill: skill.clone(),
            reason: format!(
                "Raise your {skill} proficiency from {level}% to strengthen your {} readiness",
                path.title
            ),
        })
}

#[instrument(skip(store))]
pub async fn next_focus_skill<S: LearningStore>(
    store: &S,
    learner_id: i64,
) -> Result<Option<FocusSkill>, CoreError> {
    let learner = store
        .fetch_learner(learner_id)
        .await?
        .ok_or_else(|| CoreError::learner_not_found(learner_id))?;

    Ok(pick_focus_skill(&learner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CareerDomain, EducationLevel};
    use crate::features::{course_vector, learner_features};
    use crate::matching::cosine_similarity;
    use crate::store::MemoryStore;
    use crate::{CareerPath, Course, LearnerSkill};

    fn published(id: i64, level: Option<EducationLevel>, tags: &[&str]) -> Course {
        Course {
            id,
            title: format!("Course {id}"),
            education_level: level,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            is_published: true,
            ..Course::default()
        }
    }

    #[tokio::test]
    async fn undergraduate_only_sees_matching_level() {
        let learner = Learner {
            id: 1,
            education_level: Some(EducationLevel::Undergraduate),
            ..Learner::default()
        };
        let course_a = published(10, Some(EducationLevel::Undergraduate), &["python"]);
        let course_b = published(11, Some(EducationLevel::Postgraduate), &["python"]);
        let store = MemoryStore::new()
            .with_learner(learner.clone())
            .with_course(course_a.clone())
            .with_course(course_b);

        let result = get_recommendations(&store, 1, DEFAULT_LIMIT).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].course_id, 10);
        assert_eq!(result[0].reason, "Focuses on python");
        assert!(!result[0].reason.contains("Perfect match"));

        let learner_values = learner_features(&learner).vector.as_values();
        assert_eq!(learner_values[0], 0.8);
        assert!(learner_values[1..].iter().all(|value| *value == 0.0));

        let expected = cosine_similarity(&learner_values, &course_vector(&course_a).as_values());
        assert_eq!(result[0].similarity, (expected * 100.0).round() / 100.0);
        assert_eq!(result[0].similarity, 0.61);
    }

    #[tokio::test]
    async fn enrolled_best_match_is_never_returned() {
        let learner = Learner {
            id: 1,
            skills: vec![LearnerSkill::new("Python", 100)],
            ..Learner::default()
        };
        let store = MemoryStore::new()
            .with_learner(learner)
            .with_course(published(1, None, &["python"]))
            .with_course(published(2, None, &["design"]))
            .with_enrollment(1, 1);

        let result = get_recommendations(&store, 1, DEFAULT_LIMIT).await.unwrap();

        assert_eq!(
            result.iter().map(|r| r.course_id).collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[tokio::test]
    async fn unpublished_courses_are_not_candidates() {
        let mut draft = published(2, None, &["python"]);
        draft.is_published = false;
        let store = MemoryStore::new()
            .with_learner(Learner {
                id: 1,
                ..Learner::default()
            })
            .with_course(draft);

        let result = get_recommendations(&store, 1, DEFAULT_LIMIT).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn empty_candidate_set_is_not_an_error() {
        let store = MemoryStore::new().with_learner(Learner {
            id: 3,
            education_level: Some(EducationLevel::Secondary),
            ..Learner::default()
        });

        let result = get_recommendations(&store, 3, 5).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn missing_learner_propagates_not_found() {
        let store = MemoryStore::new().with_course(published(1, None, &[]));

        let result = get_recommendations(&store, 42, DEFAULT_LIMIT).await;

        assert!(matches!(result, Err(CoreError::NotFound { id: 42, .. })));
    }

    #[tokio::test]
    async fn limit_truncates_ranked_list() {
        let mut store = MemoryStore::new().with_learner(Learner {
            id: 1,
            ..Learner::default()
        });
        for id in 1..=15 {
            store = store.with_course(published(id, None, &["excel"]));
        }

        let result = get_recommendations(&store, 1, DEFAULT_LIMIT).await.unwrap();

        assert_eq!(result.len(), 10);
        assert_eq!(result[0].course_id, 1);
    }

    fn path_learner(skills: Vec<LearnerSkill>) -> Learner {
        Learner {
            id: 5,
            career_path: Some(CareerPath {
                id: 1,
                title: "Data Analyst".into(),
                domain: Some(CareerDomain::Tech),
                required_skills: vec!["SQL".into(), "Excel".into(), "Python".into()],
            }),
            skills,
            ..Learner::default()
        }
    }

    #[test]
    fn focus_prefers_first_missing_skill() {
        let learner = path_learner(vec![LearnerSkill::new("sql", 50)]);

        let focus = pick_focus_skill(&learner).unwrap();

        assert_eq!(focus.skill, "Excel");
        assert!(focus.reason.contains("Data Analyst"));
    }

    #[test]
    fn focus_falls_back_to_weakest_skill() {
        let learner = path_learner(vec![
            LearnerSkill::new("SQL", 80),
            LearnerSkill::new("Excel", 35),
            LearnerSkill::new("Python", 60),
        ]);

        let focus = pick_focus_skill(&learner).unwrap();

        assert_eq!(focus.skill, "Excel");
        assert!(focus.reason.contains("35%"));
    }

    #[tokio::test]
    async fn focus_is_none_without_career_path() {
        let store = MemoryStore::new().with_learner(Learner {
            id: 9,
            career_focus_id: Some("healthcare".into()),
            ..Learner::default()
        });

        assert_eq!(next_focus_skill(&store, 9).await.unwrap(), None);
        assert!(matches!(
            next_focus_skill(&store, 10).await,
            Err(CoreError::NotFound { .. })
        ));
    }
}
