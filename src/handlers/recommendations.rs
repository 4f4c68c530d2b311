use axum::{extract::State, Json};

use crate::dto::RecommendationResponse;
use crate::error::AppResult;
use crate::services::recommendations;
use crate::AppState;

pub async fn get_recommendations(
    State(state): State<AppState>,
) -> AppResult<Json<RecommendationResponse>> {
    let entries = state.store.snapshot().await;
    let recent_average = recommendations::recent_average(&entries);
    let tier = recommendations::tier_for(recent_average);
    let profile = tier.profile();

    Ok(Json(RecommendationResponse {
        tier,
        title: profile.title,
        description: profile.description,
        recent_average,
        activities: profile.activities,
    }))
}
