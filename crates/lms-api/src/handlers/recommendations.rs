use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use lms_common::api::recommendation::{CourseRecommendation, FocusSkill};
use lms_common::recommendation;

use crate::error::ApiError;
use crate::{AppConfig, SharedState};

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<i64>,
}

pub fn resolve_limit(requested: Option<i64>, config: &AppConfig) -> Result<usize, ApiError> {
    let Some(limit) = requested else {
        return Ok(config.default_recommendation_limit);
    };

    let max = config.max_recommendation_limit;
    usize::try_from(limit)
        .ok()
        .filter(|limit| (1..=max).contains(limit))
        .ok_or_else(|| ApiError::BadRequest(format!("limit must be between 1 and {max}")))
}

pub async fn list_recommendations(
    State(state): State<SharedState>,
    Path(learner_id): Path<i64>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<Vec<CourseRecommendation>>, ApiError> {
    let limit = resolve_limit(query.limit, &state.config)?;
    let recommendations =
        recommendation::get_recommendations(&state.store, learner_id, limit).await?;

    Ok(Json(recommendations))
}

/// `null` when the learner has no career path to work towards.
pub async fn next_focus_skill(
    State(state): State<SharedState>,
    Path(learner_id): Path<i64>,
) -> Result<Json<Option<FocusSkill>>, ApiError> {
    let focus = recommendation::next_focus_skill(&state.store, learner_id).await?;
    Ok(Json(focus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_limit_uses_configured_default() {
        let config = AppConfig::for_tests();
        assert_eq!(resolve_limit(None, &config).unwrap(), 10);
    }

    #[test]
    fn limit_must_fall_within_bounds() {
        let config = AppConfig::for_tests();

        assert_eq!(resolve_limit(Some(1), &config).unwrap(), 1);
        assert_eq!(resolve_limit(Some(50), &config).unwrap(), 50);
        for bad in [0, -3, 51] {
            assert!(matches!(
                resolve_limit(Some(bad), &config),
                Err(ApiError::BadRequest(_))
            ));
        }
    }
}
