use serde::{Deserialize, Serialize};

use crate::catalog::{CareerDomain, Difficulty};
use crate::matching::RankedCourse;

/// One entry of the recommendations list returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub course_id: i64,
    pub title: String,
    /// Cosine similarity in 0..=1, rounded to 2 decimals.
    pub similarity: f64,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<CareerDomain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl From<RankedCourse> for CourseRecommendation {
    fn from(ranked: RankedCourse) -> Self {
        let RankedCourse {
            course,
            similarity,
            reason,
        } = ranked;

        Self {
            course_id: course.id,
            title: course.title,
            similarity: round_to_hundredths(similarity),
            reason,
            domain: course.domain,
            difficulty: course.difficulty,
            thumbnail: course.thumbnail,
        }
    }
}

/// Suggested next skill to work on for the learner's declared career path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSkill {
    pub skill: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Course;

    #[test]
    fn rounds_similarity_for_display_only() {
        let ranked = RankedCourse {
            course: Course {
                id: 4,
                title: "Intro to SQL".into(),
                difficulty: Some(Difficulty::Beginner),
                ..Course::default()
            },
            similarity: 0.613_147,
            reason: "Focuses on sql".into(),
        };

        let dto = CourseRecommendation::from(ranked);

        assert_eq!(dto.similarity, 0.61);
        assert_eq!(dto.course_id, 4);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["difficulty"], "BEGINNER");
        assert!(json.get("domain").is_none());
        assert!(json.get("thumbnail").is_none());
    }
}
