use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::dto::{TrendQuery, TrendResponse};
use crate::error::{AppError, AppResult};
use crate::services::trends;
use crate::AppState;

pub async fn get_trends(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> AppResult<Json<TrendResponse>> {
    let offset = state.config.utc_offset();
    let today = query
        .end_date
        .unwrap_or_else(|| Utc::now().with_timezone(&offset).date_naive());

    let entries = state.store.snapshot().await;
    let days = trends::daily_buckets(&entries, today, offset)
        .ok_or_else(|| AppError::Validation("end_date out of range".into()))?;

    Ok(Json(TrendResponse {
        days,
        summary: trends::summarize(&entries),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::{TimeZone, Utc};

    use crate::handlers::testing::{get, send};
    use crate::models::mood::{MoodEntry, MoodLevel};
    use crate::AppState;

    #[tokio::test]
    async fn test_empty_store_returns_seven_null_days() {
        let state = AppState::for_tests();
        let (status, body) = send(&state, get("/api/trends")).await;

        assert_eq!(status, StatusCode::OK);
        let days = body["days"].as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert!(days.iter().all(|d| d["average"].is_null()));
        assert!(body["average"].is_null());
        assert_eq!(body["check_ins"], 0);
    }

    #[tokio::test]
    async fn test_window_ends_at_requested_date() {
        let state = AppState::for_tests();
        for (level, day) in [(MoodLevel::Joyful, 8), (MoodLevel::Neutral, 8), (MoodLevel::Sad, 2)] {
            let ts = Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap();
            state.store.append(MoodEntry::new(level, "", ts)).await;
        }

        let (_, body) = send(&state, get("/api/trends?end_date=2024-06-08")).await;
        let days = body["days"].as_array().unwrap();

        assert_eq!(days[0]["date"], "2024-06-02");
        assert_eq!(days[0]["average"], 2.0);
        assert_eq!(days[6]["date"], "2024-06-08");
        assert_eq!(days[6]["average"], 4.0);
        assert_eq!(days[6]["mood_label"], "Happy");
        assert_eq!(days[6]["label"], "Sat, Jun 8");
        assert_eq!(body["check_ins"], 3);
        assert_eq!(body["insight"], "You've had some ups and downs");
    }

    #[tokio::test]
    async fn test_end_date_too_early_for_window_is_unprocessable() {
        let state = AppState::for_tests();
        let (status, body) = send(&state, get("/api/trends?end_date=-262143-01-03")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["message"], "end_date out of range");
        assert_eq!(body["error"]["code"], 422);
    }
}
