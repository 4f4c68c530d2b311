use chrono::Utc;

use crate::db::MoodStore;
use crate::models::mood::{MoodEntry, MoodLevel};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckInError {
    #[error("Please select a mood")]
    NoMoodSelected,

    #[error("Mood must be between 1 and 5, got {0}")]
    UnknownMood(i32),
}

/// A check-in as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct MoodSubmission {
    pub value: Option<i32>,
    pub note: Option<String>,
}

/// Validates a submission and appends it to the store. Rejected submissions
/// leave the store untouched.
pub async fn submit_mood(
    store: &MoodStore,
    submission: MoodSubmission,
) -> Result<MoodEntry, CheckInError> {
    let value = submission.value.ok_or(CheckInError::NoMoodSelected)?;
    let mood = MoodLevel::from_value(value).ok_or(CheckInError::UnknownMood(value))?;

    let entry = MoodEntry::new(mood, submission.note.unwrap_or_default(), Utc::now());
    store.append(entry.clone()).await;

    tracing::info!(entry_id = %entry.id, value = entry.value(), "Mood recorded");
    Ok(entry)
}

pub fn acknowledgement(entry: &MoodEntry) -> String {
    format!(
        "Thanks for sharing that you're feeling {}",
        entry.label().to_lowercase()
    )
}
