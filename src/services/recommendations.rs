use crate::models::mood::MoodEntry;
use crate::models::recommendation::Tier;
use crate::services::trends::mean;

/// How many of the most recent check-ins drive the tier choice.
const RECENT_WINDOW: usize = 3;

const LOW_CEILING: f64 = 2.5;
const HIGH_FLOOR: f64 = 4.0;

/// Mean score of the last three recorded entries, `None` with no history.
pub fn recent_average(entries: &[MoodEntry]) -> Option<f64> {
    let start = entries.len().saturating_sub(RECENT_WINDOW);
    let values: Vec<i32> = entries[start..].iter().map(MoodEntry::value).collect();
    mean(&values)
}

pub fn tier_for(average: Option<f64>) -> Tier {
    match average {
        None => Tier::Medium,
        Some(avg) if avg <= LOW_CEILING => Tier::Low,
        Some(avg) if avg >= HIGH_FLOOR => Tier::High,
        Some(_) => Tier::Medium,
    }
}
