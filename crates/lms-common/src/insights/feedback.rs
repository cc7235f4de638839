use crate::api::insights::InsightFeedback;

/// Rule-based strengths and improvements; each dimension adds at most one line.
///
/// Thresholds here are independent of the bucket labels on the sub-scores.
pub fn build_feedback(
    engagement: u32,
    skill_growth: u32,
    alignment: u32,
    consistency: u32,
) -> InsightFeedback {
    let mut feedback = InsightFeedback::default();

    if engagement >= 70 {
        feedback
            .strengths
            .push("Strong course completion rate".to_string());
    } else if engagement < 50 {
        feedback
            .improvements
            .push("Finish more of the courses you enroll in before starting new ones".to_string());
    }

    if skill_growth >= 60 {
        feedback
            .strengths
            .push("A broad and growing skill set".to_string());
    } else if skill_growth < 40 {
        feedback
            .improvements
            .push("Add skills to your profile through courses and projects".to_string());
    }

    if alignment >= 70 {
        feedback
            .strengths
            .push("Your skills align well with your target career".to_string());
    } else if alignment < 50 {
        feedback
            .improvements
            .push("Build the skills your career path requires".to_string());
    }

    if consistency >= 75 {
        feedback
            .strengths
            .push("Focused learning within your chosen domains".to_string());
    } else if consistency < 50 {
        feedback
            .improvements
            .push("Concentrate on fewer domains to deepen your expertise".to_string());
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_scores_are_all_strengths() {
        let feedback = build_feedback(100, 100, 100, 100);
        assert_eq!(feedback.strengths.len(), 4);
        assert!(feedback.improvements.is_empty());
    }

    #[test]
    fn middle_band_adds_nothing() {
        let feedback = build_feedback(60, 50, 60, 50);
        assert!(feedback.strengths.is_empty());
        assert!(feedback.improvements.is_empty());
    }

    #[test]
    fn low_scores_are_improvements() {
        let feedback = build_feedback(20, 0, 0, 30);
        assert!(feedback.strengths.is_empty());
        assert_eq!(feedback.improvements.len(), 4);
    }
}
