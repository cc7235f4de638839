use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::catalog::CoreSkill;

/// One score per [`CoreSkill`], addressed only through the enum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SkillSlots([f64; CoreSkill::COUNT]);

impl SkillSlots {
    pub fn from_fn(mut score: impl FnMut(CoreSkill) -> f64) -> Self {
        let mut slots = Self::default();
        for skill in CoreSkill::all() {
            slots[skill] = score(skill);
        }
        slots
    }

    pub fn iter(&self) -> impl Iterator<Item = (CoreSkill, f64)> + '_ {
        CoreSkill::all().map(move |skill| (skill, self[skill]))
    }
}

impl Index<CoreSkill> for SkillSlots {
    type Output = f64;

    fn index(&self, skill: CoreSkill) -> &f64 {
        &self.0[skill.index()]
    }
}

impl IndexMut<CoreSkill> for SkillSlots {
    fn index_mut(&mut self, skill: CoreSkill) -> &mut f64 {
        &mut self.0[skill.index()]
    }
}

impl Serialize for SkillSlots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CoreSkill::COUNT))?;
        for (skill, score) in self.iter() {
            map.serialize_entry(skill.needle(), &score)?;
        }
        map.end()
    }
}

/// Shared coordinate space for learners and courses:
/// education, the 15 core skills, then one trailing contextual feature
/// (project score for learners, domain score for courses).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    pub education: f64,
    pub skills: SkillSlots,
    pub context: f64,
}

impl FeatureVector {
    pub const DIMENSIONS: usize = CoreSkill::COUNT + 2;

    /// Ordered values: `[education, skill_1..skill_15, context]`.
    pub fn as_values(&self) -> [f64; Self::DIMENSIONS] {
        let mut values = [0.0; Self::DIMENSIONS];
        values[0] = self.education;
        for (skill, score) in self.skills.iter() {
            values[skill.index() + 1] = score;
        }
        values[Self::DIMENSIONS - 1] = self.context;
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_slot_order() {
        let mut skills = SkillSlots::default();
        skills[CoreSkill::Python] = 0.9;
        skills[CoreSkill::Design] = 0.4;

        let vector = FeatureVector {
            education: 0.8,
            skills,
            context: 0.25,
        };
        let values = vector.as_values();

        assert_eq!(values.len(), 17);
        assert_eq!(values[0], 0.8);
        assert_eq!(values[1], 0.9);
        assert_eq!(values[15], 0.4);
        assert_eq!(values[16], 0.25);
    }

    #[test]
    fn serializes_skills_by_name() {
        let mut skills = SkillSlots::default();
        skills[CoreSkill::MachineLearning] = 1.0;

        let json = serde_json::to_value(FeatureVector {
            education: 0.5,
            skills,
            context: 0.0,
        })
        .unwrap();

        assert_eq!(json["skills"]["machine learning"], 1.0);
        assert_eq!(json["skills"]["python"], 0.0);
        assert_eq!(json["education"], 0.5);
    }
}
