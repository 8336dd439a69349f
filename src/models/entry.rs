// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged activity entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::activity::ActivityId;

/// Repository-assigned entry identifier.
pub type EntryId = u64;

/// One logged activity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Assigned by the repository on creation, never changed afterwards
    pub id: EntryId,
    /// Calendar day of the activity
    pub date: NaiveDate,
    /// Activity type (see `ActivityCatalog`)
    pub activity_id: ActivityId,
    /// Minutes of activity
    pub duration: f64,
    pub distance: Option<f64>,
    pub notes: Option<String>,
    /// Omit from total and average activity (still listed)
    #[serde(default)]
    pub exclude: bool,
}

impl Entry {
    /// Convenience constructor used by seeding and tests.
    ///
    /// The id is a placeholder until the repository assigns one.
    pub fn new(date: NaiveDate, activity_id: ActivityId, duration: f64) -> Self {
        Self {
            id: 0,
            date,
            activity_id,
            duration,
            distance: None,
            notes: None,
            exclude: false,
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }
}
