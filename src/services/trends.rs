use chrono::{Duration, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::models::mood::{MoodEntry, MoodLevel};

/// Number of calendar days shown in the trend window, today included.
pub const TREND_WINDOW_DAYS: i64 = 7;

/// One calendar day of the trend window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBucket {
    pub date: NaiveDate,
    pub label: String,
    /// Mean mood score for the day, `None` when nothing was recorded.
    pub average: Option<f64>,
    pub mood_label: Option<&'static str>,
    pub check_ins: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub average: Option<f64>,
    pub check_ins: usize,
    pub insight: Option<&'static str>,
}

/// Buckets entries into the seven days ending at `today`, oldest first.
/// Returns `None` when the window would start before the earliest
/// representable date.
pub fn daily_buckets(
    entries: &[MoodEntry],
    today: NaiveDate,
    offset: FixedOffset,
) -> Option<Vec<TrendBucket>> {
    (0..TREND_WINDOW_DAYS)
        .map(|i| {
            let date = today.checked_sub_signed(Duration::days(TREND_WINDOW_DAYS - 1 - i))?;
            let day: Vec<i32> = entries
                .iter()
                .filter(|e| e.local_date(offset) == date)
                .map(MoodEntry::value)
                .collect();
            let average = mean(&day);

            Some(TrendBucket {
                date,
                label: date.format("%a, %b %-d").to_string(),
                average,
                mood_label: average.and_then(MoodLevel::nearest).map(MoodLevel::label),
                check_ins: day.len(),
            })
        })
        .collect()
}

pub fn summarize(entries: &[MoodEntry]) -> TrendSummary {
    let values: Vec<i32> = entries.iter().map(MoodEntry::value).collect();
    let average = mean(&values);

    TrendSummary {
        average,
        check_ins: entries.len(),
        insight: average.map(insight_for),
    }
}

fn insight_for(average: f64) -> &'static str {
    if average >= 4.5 {
        "You've been feeling great lately!"
    } else if average >= 3.5 {
        "Your mood has been positive overall"
    } else if average >= 2.5 {
        "You've had some ups and downs"
    } else if average >= 1.5 {
        "It's been a challenging time"
    } else {
        "Take extra care of yourself"
    }
}

pub(crate) fn mean(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<i32>() as f64 / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn entry_at(level: MoodLevel, y: i32, m: u32, d: u32, h: u32) -> MoodEntry {
        MoodEntry::new(level, "", Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_history_yields_seven_empty_buckets() {
        let buckets = daily_buckets(&[], day(2024, 5, 10), utc()).unwrap();

        assert_eq!(buckets.len(), 7);
        assert!(buckets.iter().all(|b| b.average.is_none() && b.check_ins == 0));
        assert!(buckets.iter().all(|b| b.mood_label.is_none()));
    }

    #[test]
    fn test_buckets_run_oldest_to_today() {
        let buckets = daily_buckets(&[], day(2024, 3, 2), utc()).unwrap();
        let dates: Vec<NaiveDate> = buckets.iter().map(|b| b.date).collect();

        assert_eq!(dates.first(), Some(&day(2024, 2, 25)));
        assert_eq!(dates.last(), Some(&day(2024, 3, 2)));
        assert!(dates.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
    }

    #[test]
    fn test_bucket_averages_same_day_entries() {
        let entries = vec![
            entry_at(MoodLevel::Joyful, 2024, 5, 10, 8),
            entry_at(MoodLevel::Sad, 2024, 5, 10, 20),
            entry_at(MoodLevel::Happy, 2024, 5, 9, 12),
        ];
        let buckets = daily_buckets(&entries, day(2024, 5, 10), utc()).unwrap();

        assert_eq!(buckets[6].average, Some(3.5));
        assert_eq!(buckets[6].check_ins, 2);
        assert_eq!(buckets[6].mood_label, Some("Happy"));
        assert_eq!(buckets[5].average, Some(4.0));
        assert_eq!(buckets[4].average, None);
    }

    #[test]
    fn test_entries_outside_window_are_ignored() {
        let entries = vec![
            entry_at(MoodLevel::Anxious, 2024, 5, 3, 12),
            entry_at(MoodLevel::Joyful, 2024, 5, 11, 12),
            entry_at(MoodLevel::Neutral, 2024, 5, 4, 12),
        ];
        let buckets = daily_buckets(&entries, day(2024, 5, 10), utc()).unwrap();

        let recorded: usize = buckets.iter().map(|b| b.check_ins).sum();
        assert_eq!(recorded, 1);
        assert_eq!(buckets[0].average, Some(3.0));
    }

    #[test]
    fn test_averages_stay_on_the_mood_scale() {
        let levels = [MoodLevel::Anxious, MoodLevel::Joyful, MoodLevel::Sad];
        let entries: Vec<MoodEntry> = (1..=7)
            .flat_map(|d| levels.iter().map(move |l| entry_at(*l, 2024, 5, d, d)))
            .collect();

        for bucket in daily_buckets(&entries, day(2024, 5, 7), utc()).unwrap() {
            let avg = bucket.average.unwrap();
            assert!((1.0..=5.0).contains(&avg));
        }
    }

    #[test]
    fn test_offset_moves_entry_to_previous_day() {
        let entries = vec![entry_at(MoodLevel::Happy, 2024, 5, 10, 2)];
        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();
        let buckets = daily_buckets(&entries, day(2024, 5, 10), pacific).unwrap();

        assert_eq!(buckets[6].average, None);
        assert_eq!(buckets[5].average, Some(4.0));
    }

    #[test]
    fn test_window_before_earliest_date_is_rejected() {
        let entries = vec![entry_at(MoodLevel::Happy, 2024, 5, 10, 12)];
        assert!(daily_buckets(&entries, NaiveDate::MIN, utc()).is_none());

        let edge = NaiveDate::MIN + Duration::days(TREND_WINDOW_DAYS - 1);
        let buckets = daily_buckets(&entries, edge, utc()).unwrap();
        assert_eq!(buckets[0].date, NaiveDate::MIN);
    }

    #[test]
    fn test_bucket_label_format() {
        let buckets = daily_buckets(&[], day(2024, 10, 12), utc()).unwrap();
        assert_eq!(buckets[6].label, "Sat, Oct 12");
        assert_eq!(buckets[0].label, "Sun, Oct 6");
    }

    #[test]
    fn test_summary_insight_thresholds() {
        let summary = |levels: &[MoodLevel]| {
            let entries: Vec<MoodEntry> = levels
                .iter()
                .map(|l| MoodEntry::new(*l, "", Utc::now()))
                .collect();
            summarize(&entries)
        };

        assert_eq!(
            summary(&[MoodLevel::Joyful, MoodLevel::Happy]).insight,
            Some("You've been feeling great lately!")
        );
        assert_eq!(
            summary(&[MoodLevel::Happy]).insight,
            Some("Your mood has been positive overall")
        );
        assert_eq!(
            summary(&[MoodLevel::Sad, MoodLevel::Neutral]).insight,
            Some("You've had some ups and downs")
        );
        assert_eq!(
            summary(&[MoodLevel::Sad]).insight,
            Some("It's been a challenging time")
        );
        assert_eq!(
            summary(&[MoodLevel::Anxious]).insight,
            Some("Take extra care of yourself")
        );
    }

    #[test]
    fn test_summary_of_nothing_has_no_average() {
        let summary = summarize(&[]);
        assert_eq!(summary.average, None);
        assert_eq!(summary.insight, None);
        assert_eq!(summary.check_ins, 0);
    }
}
