//! Pure sub-score calculations over already-fetched learner data.

use std::collections::HashSet;

use crate::api::insights::{CareerAlignment, CareerReadiness, InsightLevel, ReadinessStatus, SubScore};
use crate::catalog::CareerDomain;
use crate::{ActivityCounts, CareerPath, Learner};

use super::weights::READINESS_WEIGHTS;

fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round().clamp(0.0, 100.0) as u32
}

fn percent_level(score: u32) -> InsightLevel {
    match score {
        80.. => InsightLevel::Excellent,
        60..=79 => InsightLevel::High,
        40..=59 => InsightLevel::Moderate,
        _ => InsightLevel::Low,
    }
}

/// Completion rate over enrollments.
pub fn engagement(counts: ActivityCounts) -> SubScore {
    let score = percentage(counts.completed as usize, counts.enrolled as usize);
    let level = if counts.enrolled == 0 {
        InsightLevel::Low
    } else {
        percent_level(score)
    };

    let description = match level {
        InsightLevel::Excellent => "You finish almost every course you start",
        InsightLevel::High => "You finish most of the courses you start",
        InsightLevel::Moderate => "You finish about half of the courses you start",
        _ => "Many of your enrolled courses are still unfinished",
    };

    SubScore {
        score,
        level,
        description: description.to_string(),
    }
}

/// Number of distinct skills on the learner's profile, case-insensitive.
pub fn distinct_skill_count(learner: &Learner) -> usize {
    learner
        .skills
        .iter()
        .map(|skill| skill.name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Step function over the distinct skill count.
pub fn skill_growth(skill_count: usize) -> SubScore {
    let (score, level, description) = match skill_count {
        10.. => (100, InsightLevel::Excellent, "A broad, well-developed skill portfolio"),
        6..=9 => (75, InsightLevel::High, "Your skill set is growing steadily"),
        3..=5 => (50, InsightLevel::Moderate, "A solid foundation of skills to build on"),
        1..=2 => (25, InsightLevel::Low, "You have started building your skill set"),
        0 => (0, InsightLevel::Starting, "Complete courses and projects to add skills"),
    };

    SubScore {
        score,
        level,
        description: description.to_string(),
    }
}

/// Share of the career path's required skills the learner already has.
pub fn career_alignment(learner: &Learner, career_path: Option<&CareerPath>) -> CareerAlignment {
    let Some(path) = career_path else {
        return CareerAlignment {
            score: 0,
            level: InsightLevel::Low,
            career_path: None,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
        };
    };

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = path
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| learner.has_skill(skill));

    let score = percentage(matched_skills.len(), path.required_skills.len());

    CareerAlignment {
        score,
        level: percent_level(score),
        career_path: Some(path.title.clone()),
        matched_skills,
        missing_skills,
    }
}

/// Focus across completed courses: fewer distinct domains scores higher.
pub fn consistency(completed: u32, completed_domains: &[Option<CareerDomain>]) -> SubScore {
    if completed == 0 {
        return SubScore {
            score: 0,
            level: InsightLevel::Low,
            description: "Complete a course to measure learning consistency".to_string(),
        };
    }

    let distinct = completed_domains
        .iter()
        .flatten()
        .collect::<HashSet<_>>()
        .len();

    let (score, level, description) = match distinct {
        0..=2 => (100, InsightLevel::Excellent, "Your learning is focused on a few domains"),
        3 => (75, InsightLevel::High, "Your learning is mostly focused"),
        4 => (50, InsightLevel::Moderate, "Your learning is spread across several domains"),
        _ => (30, InsightLevel::Low, "Your learning is scattered across many domains"),
    };

    SubScore {
        score,
        level,
        description: description.to_string(),
    }
}

pub fn readiness_status(score: u32) -> ReadinessStatus {
    match score {
        80.. => ReadinessStatus::CareerReady,
        60..=79 => ReadinessStatus::OnTrack,
        40..=59 => ReadinessStatus::Developing,
        _ => ReadinessStatus::EarlyStage,
    }
}

pub fn career_readiness(
    engagement: u32,
    skill_growth: u32,
    alignment: u32,
    consistency: u32,
) -> CareerReadiness {
    let score = READINESS_WEIGHTS.combine(engagement, skill_growth, alignment, consistency);
    CareerReadiness {
        score,
        status: readiness_status(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LearnerSkill;

    fn counts(enrolled: u32, completed: u32) -> ActivityCounts {
        ActivityCounts {
            enrolled,
            completed,
        }
    }

    #[test]
    fn engagement_buckets() {
        assert_eq!(engagement(counts(5, 4)).level, InsightLevel::Excellent);
        assert_eq!(engagement(counts(5, 4)).score, 80);
        assert_eq!(engagement(counts(5, 3)).level, InsightLevel::High);
        assert_eq!(engagement(counts(5, 2)).level, InsightLevel::Moderate);
        assert_eq!(engagement(counts(5, 1)).level, InsightLevel::Low);
        assert_eq!(engagement(counts(3, 2)).score, 67);
    }

    #[test]
    fn engagement_without_enrollments_is_zero() {
        let score = engagement(counts(0, 2));
        assert_eq!(score.score, 0);
        assert_eq!(score.level, InsightLevel::Low);
    }

    #[test]
    fn skill_growth_is_a_step_function() {
        assert_eq!(skill_growth(0).score, 0);
        assert_eq!(skill_growth(0).level, InsightLevel::Starting);
        assert_eq!(skill_growth(2).score, 25);
        assert_eq!(skill_growth(3).score, 50);
        assert_eq!(skill_growth(9).score, 75);
        assert_eq!(skill_growth(10).score, 100);
        assert_eq!(skill_growth(42).level, InsightLevel::Excellent);
    }

    #[test]
    fn distinct_skills_ignore_case_duplicates() {
        let learner = Learner {
            skills: vec![
                LearnerSkill::new("Python", 40),
                LearnerSkill::new("python", 90),
                LearnerSkill::new("SQL", 10),
            ],
            ..Learner::default()
        };

        assert_eq!(distinct_skill_count(&learner), 2);
    }

    #[test]
    fn alignment_counts_required_skills() {
        let learner = Learner {
            skills: vec![LearnerSkill::new("soil science", 60), LearnerSkill::new("Excel", 20)],
            ..Learner::default()
        };
        let path = CareerPath {
            title: "Agronomist".into(),
            domain: Some(CareerDomain::Agriculture),
            required_skills: vec![
                "Soil Science".into(),
                "Irrigation".into(),
                "Excel".into(),
                "Crop Planning".into(),
            ],
            ..CareerPath::default()
        };

        let alignment = career_alignment(&learner, Some(&path));

        assert_eq!(alignment.score, 50);
        assert_eq!(alignment.level, InsightLevel::Moderate);
        assert_eq!(alignment.matched_skills, vec!["Soil Science", "Excel"]);
        assert_eq!(alignment.missing_skills, vec!["Irrigation", "Crop Planning"]);
    }

    #[test]
    fn alignment_without_path_or_requirements_is_zero() {
        let learner = Learner::default();
        assert_eq!(career_alignment(&learner, None).score, 0);

        let empty = CareerPath {
            title: "Generalist".into(),
            ..CareerPath::default()
        };
        assert_eq!(career_alignment(&learner, Some(&empty)).score, 0);
    }

    #[test]
    fn consistency_rewards_focus_over_breadth() {
        let focused = consistency(5, &[Some(CareerDomain::Tech); 5]);
        let scattered = consistency(
            5,
            &[
                Some(CareerDomain::Tech),
                Some(CareerDomain::Healthcare),
                Some(CareerDomain::Agriculture),
                Some(CareerDomain::Urban),
                Some(CareerDomain::Business),
            ],
        );

        assert_eq!(focused.score, 100);
        assert_eq!(scattered.score, 30);
        assert_eq!(scattered.level, InsightLevel::Low);
        assert!(focused.score > scattered.score);
    }

    #[test]
    fn consistency_thresholds() {
        use CareerDomain::*;
        assert_eq!(consistency(0, &[]).score, 0);
        assert_eq!(consistency(2, &[None, None]).score, 100);
        assert_eq!(consistency(3, &[Some(Tech), Some(Urban), Some(Healthcare)]).score, 75);
        assert_eq!(
            consistency(4, &[Some(Tech), Some(Urban), Some(Healthcare), Some(Agriculture)]).score,
            50
        );
    }

    #[test]
    fn readiness_weighting_example() {
        let readiness = career_readiness(80, 60, 100, 50);
        assert_eq!(readiness.score, 75);
        assert_eq!(readiness.status, ReadinessStatus::OnTrack);
    }

    #[test]
    fn readiness_status_thresholds() {
        assert_eq!(readiness_status(80), ReadinessStatus::CareerReady);
        assert_eq!(readiness_status(79), ReadinessStatus::OnTrack);
        assert_eq!(readiness_status(40), ReadinessStatus::Developing);
        assert_eq!(readiness_status(39), ReadinessStatus::EarlyStage);
    }
}
