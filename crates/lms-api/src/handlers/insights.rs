use axum::{
    Json,
    extract::{Path, State},
};

use lms_common::api::insights::CareerInsights;
use lms_common::insights::get_insights;

use crate::SharedState;
use crate::error::ApiError;

/// Responds `200 null` for unknown learners; the insights view treats that as "no data".
pub async fn learner_insights(
    State(state): State<SharedState>,
    Path(learner_id): Path<i64>,
) -> Result<Json<Option<CareerInsights>>, ApiError> {
    let insights = get_insights(&state.store, learner_id).await?;
    Ok(Json(insights))
}
