use axum::{extract::State, Json};

use crate::dto::{InsightResponse, MoodEntryResponse, RecentNoteResponse};
use crate::error::AppResult;
use crate::services::sentiment;
use crate::AppState;

const NO_NOTES_MESSAGE: &str =
    "Start adding notes to your mood check-ins to see sentiment analysis";

pub async fn get_insights(State(state): State<AppState>) -> AppResult<Json<InsightResponse>> {
    let entries = state.store.snapshot().await;
    let overview = sentiment::aggregate(&entries);

    let recent = overview
        .recent
        .iter()
        .filter_map(|note| {
            let entry = entries.iter().find(|e| e.id == note.entry_id)?;
            Some(RecentNoteResponse {
                entry: MoodEntryResponse::from(entry),
                scores: note.scores,
                dominant: note.dominant,
            })
        })
        .collect();

    let message = overview
        .dominant
        .map(|d| d.message())
        .unwrap_or(NO_NOTES_MESSAGE)
        .to_string();

    tracing::debug!(
        entries_analyzed = overview.entries_analyzed,
        dominant = ?overview.dominant,
        "Sentiment insights derived"
    );

    Ok(Json(InsightResponse {
        overall: overview.overall,
        dominant: overview.dominant,
        message,
        entries_analyzed: overview.entries_analyzed,
        recent,
    }))
}
