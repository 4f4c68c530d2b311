use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use uuid::Uuid;

/// The five-point mood scale. Numeric value, label and emoji all come from
/// this one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodLevel {
    Anxious,
    Sad,
    Neutral,
    Happy,
    Joyful,
}

impl MoodLevel {
    /// Highest first, the order the check-in picker shows them in.
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Joyful,
        MoodLevel::Happy,
        MoodLevel::Neutral,
        MoodLevel::Sad,
        MoodLevel::Anxious,
    ];

    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }

    /// Level closest to a mean score, rounding halves up.
    pub fn nearest(score: f64) -> Option<Self> {
        let rounded = (score + 0.5).floor();
        if !(1.0..=5.0).contains(&rounded) {
            return None;
        }
        Self::from_value(rounded as i32)
    }

    pub fn value(self) -> i32 {
        match self {
            MoodLevel::Anxious => 1,
            MoodLevel::Sad => 2,
            MoodLevel::Neutral => 3,
            MoodLevel::Happy => 4,
            MoodLevel::Joyful => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::Anxious => "Anxious",
            MoodLevel::Sad => "Sad",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::Happy => "Happy",
            MoodLevel::Joyful => "Joyful",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodLevel::Anxious => "😰",
            MoodLevel::Sad => "😔",
            MoodLevel::Neutral => "😐",
            MoodLevel::Happy => "😊",
            MoodLevel::Joyful => "😄",
        }
    }
}

/// One recorded check-in. Entries are never edited after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood: MoodLevel,
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub fn new(mood: MoodLevel, note: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood,
            note: note.into(),
            timestamp,
        }
    }

    pub fn value(&self) -> i32 {
        self.mood.value()
    }

    pub fn label(&self) -> &'static str {
        self.mood.label()
    }

    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }

    pub fn local_date(&self, offset: FixedOffset) -> NaiveDate {
        self.timestamp.with_timezone(&offset).date_naive()
    }
}
