//! Aggregate statistics over the full entry set. Pure functions; the
//! handler fetches rows and hands them here.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::mood::MoodEntry;

/// How many of the most recent entries feed the trend line.
pub const RECENT_TREND_LEN: usize = 7;

#[derive(Debug, Serialize)]
pub struct MoodStats {
    pub total_entries: usize,
    /// Mean score rounded to 2 decimals; 0.0 when there are no entries.
    pub average_mood: f64,
    /// Keyed by score; only scores present in the data appear.
    pub mood_distribution: BTreeMap<i16, DistributionBucket>,
    /// Most recent entries, ascending by date for trend-line consumption.
    pub recent_trend: Vec<TrendPoint>,
}

#[derive(Debug, Serialize)]
pub struct DistributionBucket {
    pub count: i64,
    pub emoji: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mood_score: i16,
    pub emoji: String,
}

/// `entries` must be sorted newest `entry_date` first (the List() order).
pub fn summarize(entries: &[MoodEntry]) -> MoodStats {
    if entries.is_empty() {
        return MoodStats {
            total_entries: 0,
            average_mood: 0.0,
            mood_distribution: BTreeMap::new(),
            recent_trend: Vec::new(),
        };
    }

    let total_entries = entries.len();
    let sum: i64 = entries.iter().map(|e| e.mood_score as i64).sum();
    let average_mood = round2(sum as f64 / total_entries as f64);

    let mut mood_distribution: BTreeMap<i16, DistributionBucket> = BTreeMap::new();
    for entry in entries {
        mood_distribution
            .entry(entry.mood_score)
            .or_insert_with(|| DistributionBucket {
                count: 0,
                emoji: entry.emoji.clone(),
                label: entry.label.clone(),
            })
            .count += 1;
    }

    let recent_trend = entries
        .iter()
        .take(RECENT_TREND_LEN)
        .rev()
        .map(|e| TrendPoint {
            date: e.entry_date,
            mood_score: e.mood_score,
            emoji: e.emoji.clone(),
        })
        .collect();

    MoodStats {
        total_entries,
        average_mood,
        mood_distribution,
        recent_trend,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
