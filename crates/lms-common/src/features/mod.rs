mod builder;
mod vector;

pub use builder::{
    LearnerFeatures, build_course_vector, build_learner_vector, course_vector, learner_features,
};
pub use vector::{FeatureVector, SkillSlots};
