//! # Wellness Hub — Request/Response DTOs
//!
//! All API contract types in one module.
//!
//! Conventions:
//! - `*Request` / `*Query` → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Field limits are expressed via `validator` derive macros

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::mood::MoodEntry;
use crate::models::recommendation::{Activity, Tier};
use crate::services::checkin::MoodSubmission;
use crate::services::sentiment::{Sentiment, SentimentScores};
use crate::services::trends::{TrendBucket, TrendSummary};

// ============================================================================
// Moods
// ============================================================================

/// POST /api/moods
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitMoodRequest {
    /// Mood value 1-5. Missing means nothing was selected.
    pub value: Option<i32>,

    #[validate(length(max = 2000, message = "Note must be under 2000 characters"))]
    pub note: Option<String>,
}

impl From<SubmitMoodRequest> for MoodSubmission {
    fn from(req: SubmitMoodRequest) -> Self {
        MoodSubmission {
            value: req.value,
            note: req.note,
        }
    }
}

/// GET /api/moods
#[derive(Debug, Deserialize)]
pub struct MoodListQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodEntryResponse {
    pub id: Uuid,
    pub value: i32,
    pub label: &'static str,
    pub emoji: &'static str,
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&MoodEntry> for MoodEntryResponse {
    fn from(entry: &MoodEntry) -> Self {
        Self {
            id: entry.id,
            value: entry.value(),
            label: entry.label(),
            emoji: entry.mood.emoji(),
            note: entry.note.clone(),
            timestamp: entry.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitMoodResponse {
    pub entry: MoodEntryResponse,
    pub message: String,
}

// ============================================================================
// Trends
// ============================================================================

/// GET /api/trends
#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    /// Last day of the window. Default: today in the configured offset.
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub days: Vec<TrendBucket>,
    #[serde(flatten)]
    pub summary: TrendSummary,
}

// ============================================================================
// Insights
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RecentNoteResponse {
    pub entry: MoodEntryResponse,
    pub scores: SentimentScores,
    pub dominant: Sentiment,
}

/// GET /api/insights
#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub overall: Option<SentimentScores>,
    pub dominant: Option<Sentiment>,
    pub message: String,
    pub entries_analyzed: usize,
    pub recent: Vec<RecentNoteResponse>,
}

// ============================================================================
// Recommendations
// ============================================================================

/// GET /api/recommendations
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub tier: Tier,
    pub title: &'static str,
    pub description: &'static str,
    pub recent_average: Option<f64>,
    pub activities: &'static [Activity],
}
