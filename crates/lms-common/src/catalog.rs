//! Process-wide constant tables: education tiers, career domains, difficulty
//! tiers and the fixed list of core skills that make up the vector slots.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Ordinal education tier shared by learners and courses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum EducationLevel {
    Secondary,
    HigherSecondary,
    Diploma,
    Undergraduate,
    Postgraduate,
}

impl EducationLevel {
    pub const TIERS: u8 = 5;

    pub const fn rank(self) -> u8 {
        match self {
            EducationLevel::Secondary => 1,
            EducationLevel::HigherSecondary => 2,
            EducationLevel::Diploma => 3,
            EducationLevel::Undergraduate => 4,
            EducationLevel::Postgraduate => 5,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CareerDomain {
    Tech,
    Healthcare,
    Agriculture,
    Urban,
    Business,
    Creative,
}

impl CareerDomain {
    /// Number of ranked domains; vector scores divide by this.
    pub const TIERS: u8 = 4;

    /// Only the four career-path domains carry a rank. Unranked domains score
    /// like an unset domain in feature vectors.
    pub const fn rank(self) -> Option<u8> {
        match self {
            CareerDomain::Tech => Some(1),
            CareerDomain::Healthcare => Some(2),
            CareerDomain::Agriculture => Some(3),
            CareerDomain::Urban => Some(4),
            CareerDomain::Business | CareerDomain::Creative => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CareerDomain::Tech => "Technology",
            CareerDomain::Healthcare => "Healthcare",
            CareerDomain::Agriculture => "Agriculture",
            CareerDomain::Urban => "Urban Development",
            CareerDomain::Business => "Business",
            CareerDomain::Creative => "Creative Arts",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const fn rank(self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }
}

/// The 15 skills the vector builder recognizes. The discriminant is the slot
/// index inside [`crate::features::SkillSlots`]; keep it dense and ordered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum CoreSkill {
    Python = 0,
    Javascript,
    Java,
    Sql,
    Html,
    Css,
    React,
    Node,
    MachineLearning,
    DataAnalysis,
    Cloud,
    Excel,
    Communication,
    ProjectManagement,
    Design,
}

impl CoreSkill {
    pub const COUNT: usize = 15;

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase needle used for substring matching against skill names and tags.
    pub const fn needle(self) -> &'static str {
        match self {
            CoreSkill::Python => "python",
            CoreSkill::Javascript => "javascript",
            CoreSkill::Java => "java",
            CoreSkill::Sql => "sql",
            CoreSkill::Html => "html",
            CoreSkill::Css => "css",
            CoreSkill::React => "react",
            CoreSkill::Node => "node",
            CoreSkill::MachineLearning => "machine learning",
            CoreSkill::DataAnalysis => "data analysis",
            CoreSkill::Cloud => "cloud",
            CoreSkill::Excel => "excel",
            CoreSkill::Communication => "communication",
            CoreSkill::ProjectManagement => "project management",
            CoreSkill::Design => "design",
        }
    }

    pub fn all() -> impl Iterator<Item = CoreSkill> {
        CoreSkill::iter()
    }

    /// Case-insensitive substring test: does `name` mention this core skill?
    pub fn matches(self, name: &str) -> bool {
        name.to_lowercase().contains(self.needle())
    }
}

/// Parse a stored enum column, treating unknown text as unset.
pub fn parse_optional<T>(column: &'static str, raw: Option<&str>) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(column, value = raw, "unrecognized enum value; treating as unset");
            None
        }
    }
}

const TECH_FOCUS_KEYWORDS: &[&str] = &[
    "tech", "software", "developer", "engineer", "program", "data", "computer", "web", "cloud",
    "cyber",
];

/// Best-effort domain for a free-text career focus identifier.
///
/// Priority is fixed: agriculture, healthcare, urban, then the tech keyword set.
pub fn infer_domain_from_focus(focus: &str) -> Option<CareerDomain> {
    let focus = focus.to_lowercase();

    if focus.contains("agri") {
        Some(CareerDomain::Agriculture)
    } else if focus.contains("health") {
        Some(CareerDomain::Healthcare)
    } else if focus.contains("urban") {
        Some(CareerDomain::Urban)
    } else if TECH_FOCUS_KEYWORDS
        .iter()
        .any(|keyword| focus.contains(keyword))
    {
        Some(CareerDomain::Tech)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_skill_indices_are_dense() {
        let indices: Vec<usize> = CoreSkill::all().map(CoreSkill::index).collect();
        assert_eq!(indices, (0..CoreSkill::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn ranks_cover_each_tier_once() {
        let education: Vec<u8> = EducationLevel::iter().map(EducationLevel::rank).collect();
        assert_eq!(education, vec![1, 2, 3, 4, 5]);

        let domains: Vec<u8> = CareerDomain::iter().filter_map(CareerDomain::rank).collect();
        assert_eq!(domains, vec![1, 2, 3, 4]);

        let difficulty: Vec<u8> = Difficulty::iter().map(Difficulty::rank).collect();
        assert_eq!(difficulty, vec![1, 2, 3]);
    }

    #[test]
    fn parses_stored_enum_text() {
        assert_eq!(
            "UNDERGRADUATE".parse::<EducationLevel>().ok(),
            Some(EducationLevel::Undergraduate)
        );
        assert_eq!(
            "higher_secondary".parse::<EducationLevel>().ok(),
            Some(EducationLevel::HigherSecondary)
        );
        assert_eq!(
            parse_optional::<CareerDomain>("domain", Some("SPACE")),
            None
        );
        assert_eq!(parse_optional::<CareerDomain>("domain", Some("  ")), None);
        assert_eq!(
            parse_optional::<Difficulty>("difficulty", Some("Advanced")),
            Some(Difficulty::Advanced)
        );
    }

    #[test]
    fn core_skill_match_is_case_insensitive_substring() {
        assert!(CoreSkill::Python.matches("Advanced Python 3"));
        assert!(CoreSkill::Java.matches("JavaScript"));
        assert!(!CoreSkill::Sql.matches("Spreadsheets"));
    }

    #[test]
    fn focus_inference_follows_priority_order() {
        assert_eq!(
            infer_domain_from_focus("agri-tech-startups"),
            Some(CareerDomain::Agriculture)
        );
        assert_eq!(
            infer_domain_from_focus("digital-health"),
            Some(CareerDomain::Healthcare)
        );
        assert_eq!(
            infer_domain_from_focus("urban_planning"),
            Some(CareerDomain::Urban)
        );
        assert_eq!(
            infer_domain_from_focus("Software Engineer"),
            Some(CareerDomain::Tech)
        );
        assert_eq!(infer_domain_from_focus("law"), None);
    }
}
