use axum::{
    Json,
    extract::{Path, State},
};

use lms_common::api::features::{CourseFeaturesResponse, LearnerFeaturesResponse};
use lms_common::features::{build_course_vector, build_learner_vector};

use crate::SharedState;
use crate::error::ApiError;

pub async fn learner_features(
    State(state): State<SharedState>,
    Path(learner_id): Path<i64>,
) -> Result<Json<LearnerFeaturesResponse>, ApiError> {
    let features = build_learner_vector(&state.store, learner_id).await?;

    Ok(Json(LearnerFeaturesResponse {
        learner_id,
        features,
    }))
}

pub async fn course_features(
    State(state): State<SharedState>,
    Path(course_id): Path<i64>,
) -> Result<Json<CourseFeaturesResponse>, ApiError> {
    let vector = build_course_vector(&state.store, course_id).await?;

    Ok(Json(CourseFeaturesResponse { course_id, vector }))
}
