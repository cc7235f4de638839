pub mod api;
pub mod catalog;
pub mod db;
pub mod error;
pub mod features;
pub mod insights;
pub mod logging;
pub mod matching;
pub mod recommendation;
pub mod store;

use catalog::{CareerDomain, Difficulty, EducationLevel};

// Read-only inputs owned by the surrounding LMS. The core never writes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Learner {
    pub id: i64,
    pub name: String,
    pub education_level: Option<EducationLevel>,
    pub career_path: Option<CareerPath>,
    /// Free-text career focus, used when no career path is linked.
    pub career_focus_id: Option<String>,
    pub skills: Vec<LearnerSkill>,
    pub project_count: u32,
}

impl Learner {
    /// Proficiency for a skill name (case-insensitive exact match).
    pub fn proficiency_of(&self, skill: &str) -> Option<u8> {
        self.skills
            .iter()
            .find(|owned| owned.name.eq_ignore_ascii_case(skill))
            .map(|owned| owned.level)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.proficiency_of(skill).is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LearnerSkill {
    pub name: String,
    /// Proficiency 0..=100.
    pub level: u8,
}

impl LearnerSkill {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level: level.clamp(0, 100) as u8,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerPath {
    pub id: i64,
    pub title: String,
    pub domain: Option<CareerDomain>,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub education_level: Option<EducationLevel>,
    pub domain: Option<CareerDomain>,
    /// Explicitly linked skill names.
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub has_project: bool,
    pub thumbnail: Option<String>,
    pub is_published: bool,
}

impl Course {
    /// True when a linked skill or a tag equals `skill`, ignoring case.
    pub fn covers_skill(&self, skill: &str) -> bool {
        self.skills
            .iter()
            .chain(self.tags.iter())
            .any(|name| name.eq_ignore_ascii_case(skill))
    }
}

/// Enrollment and completion counters for one learner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityCounts {
    pub enrolled: u32,
    /// Completions are certificates issued for (learner, course).
    pub completed: u32,
}
