use std::cmp::Ordering;
use std::collections::HashSet;

use crate::features::{course_vector, learner_features};
use crate::{Course, Learner};

use super::similarity::cosine_similarity;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCourse {
    pub course: Course,
    /// Full precision; round only for display.
    pub similarity: f64,
    pub reason: String,
}

/// Hard eligibility rules applied before any scoring.
///
/// A learner with an education level only sees courses targeting exactly that
/// level; courses the learner is enrolled in are always dropped. Input order is kept.
pub fn select_candidates(
    learner: &Learner,
    courses: Vec<Course>,
    enrolled: &HashSet<i64>,
) -> Vec<Course> {
    courses
        .into_iter()
        .filter(|course| match learner.education_level {
            Some(level) => course.education_level == Some(level),
            None => true,
        })
        .filter(|course| !enrolled.contains(&course.id))
        .collect()
}

pub fn recommendation_reason(learner: &Learner, course: &Course) -> String {
    let career_path = learner.career_path.as_ref();

    if let (Some(path), Some(domain)) = (career_path, course.domain) {
        if path.domain == Some(domain) {
            return format!("Perfect match for your {} career path", path.title);
        }
    }

    if let Some(domain) = course.domain {
        return format!(
            "Explore the {} domain to broaden your career options",
            domain.label()
        );
    }

    if !course.tags.is_empty() {
        return format!("Focuses on {}", course.tags.join(", "));
    }

    "Recommended based on your learning profile".to_string()
}

/// Scores every candidate against the learner and keeps the `limit` best.
///
/// Ties keep candidate order.
pub fn rank_courses(learner: &Learner, candidates: Vec<Course>, limit: usize) -> Vec<RankedCourse> {
    let learner_values = learner_features(learner).vector.as_values();

    let mut ranked: Vec<RankedCourse> = candidates
        .into_iter()
        .map(|course| {
            let similarity = cosine_similarity(&learner_values, &course_vector(&course).as_values());
            let reason = recommendation_reason(learner, &course);
            RankedCourse {
                course,
                similarity,
                reason,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CareerDomain, EducationLevel};
    use crate::{CareerPath, LearnerSkill};

    fn course(id: i64, level: Option<EducationLevel>, tags: &[&str]) -> Course {
        Course {
            id,
            title: format!("Course {id}"),
            education_level: level,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            is_published: true,
            ..Course::default()
        }
    }

    #[test]
    fn education_filter_is_strict_equality() {
        let learner = Learner {
            education_level: Some(EducationLevel::Diploma),
            ..Learner::default()
        };
        let courses = vec![
            course(1, Some(EducationLevel::Diploma), &[]),
            course(2, Some(EducationLevel::Undergraduate), &[]),
            course(3, Some(EducationLevel::HigherSecondary), &[]),
            course(4, None, &[]),
            course(5, Some(EducationLevel::Diploma), &["python"]),
        ];

        let ids: Vec<i64> = select_candidates(&learner, courses, &HashSet::new())
            .iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn learner_without_level_sees_every_level() {
        let courses = vec![
            course(1, Some(EducationLevel::Postgraduate), &[]),
            course(2, None, &[]),
        ];

        let selected = select_candidates(&Learner::default(), courses, &HashSet::new());

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn enrolled_courses_are_excluded() {
        let learner = Learner::default();
        let enrolled = HashSet::from([2]);

        let selected = select_candidates(
            &learner,
            vec![course(1, None, &[]), course(2, None, &[])],
            &enrolled,
        );

        assert_eq!(selected.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn reason_priority_order() {
        let learner = Learner {
            career_path: Some(CareerPath {
                title: "Data Scientist".into(),
                domain: Some(CareerDomain::Tech),
                ..CareerPath::default()
            }),
            ..Learner::default()
        };

        let mut tech = course(1, None, &["python"]);
        tech.domain = Some(CareerDomain::Tech);
        assert_eq!(
            recommendation_reason(&learner, &tech),
            "Perfect match for your Data Scientist career path"
        );

        let mut health = course(2, None, &["python"]);
        health.domain = Some(CareerDomain::Healthcare);
        assert_eq!(
            recommendation_reason(&learner, &health),
            "Explore the Healthcare domain to broaden your career options"
        );

        let tagged = course(3, None, &["python", "sql"]);
        assert_eq!(
            recommendation_reason(&learner, &tagged),
            "Focuses on python, sql"
        );

        let bare = course(4, None, &[]);
        assert_eq!(
            recommendation_reason(&learner, &bare),
            "Recommended based on your learning profile"
        );
    }

    #[test]
    fn ranks_by_similarity_and_truncates() {
        let learner = Learner {
            skills: vec![LearnerSkill::new("Python", 90), LearnerSkill::new("SQL", 80)],
            ..Learner::default()
        };
        let candidates = vec![
            course(1, None, &["design"]),
            course(2, None, &["python", "sql"]),
            course(3, None, &["python"]),
        ];

        let ranked = rank_courses(&learner, candidates, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].course.id, 2);
        assert_eq!(ranked[1].course.id, 3);
        assert!(ranked[0].similarity >= ranked[1].similarity);
    }

    #[test]
    fn ties_keep_candidate_order() {
        let learner = Learner::default();
        let candidates = vec![
            course(10, None, &["excel"]),
            course(11, None, &["cloud"]),
            course(12, None, &["html"]),
        ];

        let ranked = rank_courses(&learner, candidates, 10);

        assert_eq!(
            ranked.iter().map(|r| r.course.id).collect::<Vec<_>>(),
            vec![10, 11, 12]
        );
    }
}
