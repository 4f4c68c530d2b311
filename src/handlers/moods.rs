use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{MoodEntryResponse, MoodListQuery, SubmitMoodRequest, SubmitMoodResponse};
use crate::error::{AppError, AppResult};
use crate::services::checkin;
use crate::AppState;

// ── POST /api/moods ──────────────────────────────────────────────────────────

pub async fn submit_mood(
    State(state): State<AppState>,
    Json(body): Json<SubmitMoodRequest>,
) -> AppResult<(StatusCode, Json<SubmitMoodResponse>)> {
    body.validate()?;

    let entry = checkin::submit_mood(&state.store, body.into())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Check-in rejected");
            AppError::from(e)
        })?;

    // Dashboards re-derive their views on this event; no subscribers is fine.
    let msg = serde_json::json!({
        "type": "mood_recorded",
        "entry_id": entry.id,
        "value": entry.value(),
        "label": entry.label(),
    });
    let _ = state.ws_tx.send(msg.to_string());

    Ok((
        StatusCode::CREATED,
        Json(SubmitMoodResponse {
            message: checkin::acknowledgement(&entry),
            entry: MoodEntryResponse::from(&entry),
        }),
    ))
}

// ── GET /api/moods ───────────────────────────────────────────────────────────

pub async fn list_moods(
    State(state): State<AppState>,
    Query(query): Query<MoodListQuery>,
) -> AppResult<Json<Vec<MoodEntryResponse>>> {
    let entries = state.store.snapshot().await;
    let limit = query.limit.unwrap_or(entries.len());

    let newest_first = entries
        .iter()
        .rev()
        .take(limit)
        .map(MoodEntryResponse::from)
        .collect();

    Ok(Json(newest_first))
}

// ── GET /api/moods/:id ───────────────────────────────────────────────────────

pub async fn get_mood(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MoodEntryResponse>> {
    let entry = state
        .store
        .get(id)
        .await
        .ok_or(AppError::NotFound("Mood entry not found".into()))?;

    Ok(Json(MoodEntryResponse::from(&entry)))
}
