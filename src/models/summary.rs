//! Activity totals shown above the entry list.
//!
//! Recomputed from the full entry list on every request; nothing is cached.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::models::Entry;

/// Aggregates over a list of entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrySummary {
    /// Sum of durations of entries that are not excluded (minutes)
    pub total_activity: f64,
    /// Distinct dates across all entries, excluded ones included
    pub active_day_count: usize,
    /// `total_activity / active_day_count`, or `None` when there are no active days
    pub average_daily_activity: Option<f64>,
}

impl EntrySummary {
    /// Aggregate a list of entries.
    ///
    /// The exclude flag removes an entry from the total but not from the day
    /// count: a day whose entries are all excluded still counts as active.
    pub fn from_entries(entries: &[Entry]) -> Self {
        // Fold from +0.0: `Sum for f64` starts at -0.0, which renders as "-0".
        let total_activity = entries
            .iter()
            .filter(|e| !e.exclude)
            .fold(0.0, |acc, e| acc + e.duration);

        let active_day_count = entries
            .iter()
            .map(|e| e.date)
            .collect::<HashSet<NaiveDate>>()
            .len();

        let average_daily_activity = if active_day_count == 0 {
            None
        } else {
            Some(total_activity / active_day_count as f64)
        };

        Self {
            total_activity,
            active_day_count,
            average_daily_activity,
        }
    }
}
