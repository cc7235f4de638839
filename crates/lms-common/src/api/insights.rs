use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightLevel {
    Excellent,
    High,
    Moderate,
    Low,
    Starting,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadinessStatus {
    CareerReady,
    OnTrack,
    Developing,
    EarlyStage,
    Locked,
}

impl ReadinessStatus {
    pub fn summary(self) -> &'static str {
        match self {
            ReadinessStatus::CareerReady => {
                "You are ready to pursue opportunities in your target career"
            }
            ReadinessStatus::OnTrack => "You are on track; keep building toward your career goal",
            ReadinessStatus::Developing => {
                "Your profile is developing; focus on the suggested improvements"
            }
            ReadinessStatus::EarlyStage => {
                "You are early in your journey; steady progress will raise your readiness"
            }
            ReadinessStatus::Locked => "Career insights are locked",
        }
    }
}

/// A 0..=100 score with its bucket and a canned description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScore {
    pub score: u32,
    pub level: InsightLevel,
    pub description: String,
}

impl SubScore {
    pub fn locked() -> Self {
        Self {
            score: 0,
            level: InsightLevel::Locked,
            description: "Unlock career insights to see this score".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerAlignment {
    pub score: u32,
    pub level: InsightLevel,
    /// Title of the career path the score was measured against.
    pub career_path: Option<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl CareerAlignment {
    pub fn locked() -> Self {
        Self {
            score: 0,
            level: InsightLevel::Locked,
            career_path: None,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerReadiness {
    pub score: u32,
    pub status: ReadinessStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockProgress {
    pub enrolled: u32,
    pub completed: u32,
    pub required_enrollments: u32,
    pub required_completions: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightFeedback {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightCourse {
    pub course_id: i64,
    pub title: String,
    pub reason: String,
}

/// Behavioral insights for one learner, gated by the unlock rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerInsights {
    pub learner_id: i64,
    pub is_unlocked: bool,
    pub progress: UnlockProgress,
    pub message: String,
    pub career_readiness: CareerReadiness,
    pub engagement: SubScore,
    pub skill_growth: SubScore,
    pub career_alignment: CareerAlignment,
    pub consistency: SubScore,
    pub feedback: InsightFeedback,
    pub recommended_courses: Vec<InsightCourse>,
    pub generated_at: DateTime<Utc>,
}
