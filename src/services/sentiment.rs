//! Keyword-count sentiment scoring for check-in notes.
//!
//! Each whitespace-separated token is tested for containing a keyword, with
//! positive words checked first, then negative, then neutral. A token counts
//! toward at most one category. Percentages are rounded independently and are
//! left un-normalised, so they can sum to 99 or 101.

use serde::Serialize;
use uuid::Uuid;

use crate::models::mood::MoodEntry;

pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "good", "great", "amazing", "wonderful", "fantastic", "love", "excited", "joy",
    "peaceful", "calm", "better", "awesome", "beautiful", "grateful",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "sad", "bad", "terrible", "awful", "hate", "angry", "frustrated", "worried", "anxious",
    "stressed", "upset", "disappointed", "tired", "exhausted", "overwhelmed",
];

pub const NEUTRAL_WORDS: &[&str] = &[
    "okay", "fine", "alright", "normal", "usual", "average", "work", "day", "time", "thing",
];

/// Returned when a note contains no keyword at all.
pub const NO_SIGNAL: SentimentScores = SentimentScores {
    positive: 33,
    negative: 33,
    neutral: 34,
};

/// How many of the latest noted entries are listed individually.
const RECENT_NOTES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentScores {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordCounts {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl KeywordCounts {
    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}

impl SentimentScores {
    pub fn dominant(&self) -> Sentiment {
        if self.positive > self.negative && self.positive > self.neutral {
            Sentiment::Positive
        } else if self.negative > self.positive && self.negative > self.neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Label for a single note. Unlike `dominant`, a positive/negative tie
    /// that beats neutral is labelled negative.
    pub fn badge(&self) -> Sentiment {
        if self.positive > self.negative {
            if self.positive > self.neutral {
                Sentiment::Positive
            } else {
                Sentiment::Neutral
            }
        } else if self.negative > self.neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl Sentiment {
    pub fn message(self) -> &'static str {
        match self {
            Sentiment::Positive => "Your journal entries reflect a positive outlook!",
            Sentiment::Negative => "Your writings show you're working through challenges",
            Sentiment::Neutral => "Your entries show a balanced perspective",
        }
    }
}

pub fn count_keywords(text: &str) -> KeywordCounts {
    let lowered = text.to_lowercase();
    let mut counts = KeywordCounts::default();

    for token in lowered.split_whitespace() {
        if contains_any(token, POSITIVE_WORDS) {
            counts.positive += 1;
        } else if contains_any(token, NEGATIVE_WORDS) {
            counts.negative += 1;
        } else if contains_any(token, NEUTRAL_WORDS) {
            counts.neutral += 1;
        }
    }

    counts
}

pub fn analyze(text: &str) -> SentimentScores {
    let counts = count_keywords(text);
    let total = counts.total();
    if total == 0 {
        return NO_SIGNAL;
    }

    let share = |n: u32| round_half_up(f64::from(n) / f64::from(total) * 100.0);
    SentimentScores {
        positive: share(counts.positive),
        negative: share(counts.negative),
        neutral: share(counts.neutral),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteSentiment {
    pub entry_id: Uuid,
    pub scores: SentimentScores,
    pub dominant: Sentiment,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentOverview {
    /// Per-category mean over noted entries; `None` when no entry has a note.
    pub overall: Option<SentimentScores>,
    pub dominant: Option<Sentiment>,
    pub entries_analyzed: usize,
    /// Latest noted entries, oldest of the three first.
    pub recent: Vec<NoteSentiment>,
}

pub fn aggregate(entries: &[MoodEntry]) -> SentimentOverview {
    let scored: Vec<(&MoodEntry, SentimentScores)> = entries
        .iter()
        .filter(|e| e.has_note())
        .map(|e| (e, analyze(&e.note)))
        .collect();

    let overall = if scored.is_empty() {
        None
    } else {
        let n = scored.len() as f64;
        let avg = |pick: fn(&SentimentScores) -> u32| {
            let sum: u32 = scored.iter().map(|(_, s)| pick(s)).sum();
            round_half_up(f64::from(sum) / n)
        };
        Some(SentimentScores {
            positive: avg(|s| s.positive),
            negative: avg(|s| s.negative),
            neutral: avg(|s| s.neutral),
        })
    };

    let recent = scored
        .iter()
        .skip(scored.len().saturating_sub(RECENT_NOTES))
        .map(|(entry, scores)| NoteSentiment {
            entry_id: entry.id,
            scores: *scores,
            dominant: scores.badge(),
        })
        .collect();

    SentimentOverview {
        dominant: overall.as_ref().map(SentimentScores::dominant),
        overall,
        entries_analyzed: scored.len(),
        recent,
    }
}

fn contains_any(token: &str, words: &[&str]) -> bool {
    words.iter().any(|w| token.contains(w))
}

fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}
