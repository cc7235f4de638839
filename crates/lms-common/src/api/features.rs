use serde::Serialize;

use crate::features::{FeatureVector, LearnerFeatures};

#[derive(Debug, Clone, Serialize)]
pub struct LearnerFeaturesResponse {
    pub learner_id: i64,
    #[serde(flatten)]
    pub features: LearnerFeatures,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseFeaturesResponse {
    pub course_id: i64,
    pub vector: FeatureVector,
}
