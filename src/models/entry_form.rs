// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entry form binding and validation.
//!
//! The submitted form is kept as raw strings so it can be redisplayed exactly
//! as typed when validation fails.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::validation::ValidationErrors;
use crate::models::{Entry, EntryId};
use crate::services::ActivityCatalog;

/// Date format used by `<input type="date">`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest accepted notes value, in characters.
pub const NOTES_MAX_LENGTH: usize = 200;

pub const DURATION_MUST_BE_POSITIVE: &str = "The duration field must be greater than 0";

/// Longest accepted duration: one full day, in minutes.
pub const DURATION_MAX_MINUTES: f64 = 1440.0;

pub const DURATION_TOO_LONG: &str = "The duration field must be 1440 minutes or less";

/// Form field names, shared by binding and rendering.
pub mod fields {
    pub const ID: &str = "id";
    pub const DATE: &str = "date";
    pub const ACTIVITY: &str = "activity_id";
    pub const DURATION: &str = "duration";
    pub const DISTANCE: &str = "distance";
    pub const NOTES: &str = "notes";
    pub const EXCLUDE: &str = "exclude";
}

/// Raw entry form as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub activity_id: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Checkbox: present (`true`/`on`) when ticked, absent otherwise
    #[serde(default)]
    pub exclude: Option<String>,
}

impl EntryForm {
    /// Blank form for a new entry, dated `today`.
    pub fn draft(today: NaiveDate) -> Self {
        Self {
            date: Some(today.format(DATE_FORMAT).to_string()),
            ..Self::default()
        }
    }

    /// Form pre-filled from a stored entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            id: Some(entry.id.to_string()),
            date: Some(entry.date.format(DATE_FORMAT).to_string()),
            activity_id: Some(entry.activity_id.to_string()),
            duration: Some(entry.duration.to_string()),
            distance: entry.distance.map(|d| d.to_string()),
            notes: entry.notes.clone(),
            exclude: entry.exclude.then(|| "true".to_string()),
        }
    }

    /// The submitted id, if present and well formed.
    pub fn entry_id(&self) -> Option<EntryId> {
        parse_entry_id(self.id.as_deref())
    }

    pub fn is_excluded(&self) -> bool {
        matches!(
            self.exclude.as_deref().map(str::trim),
            Some(v) if v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("on")
        )
    }

    /// Bind the raw values into an entry and run every field check.
    ///
    /// The returned entry carries id 0 unless the form holds a valid id; the
    /// caller decides whether the id matters.
    pub fn bind(&self, activities: &ActivityCatalog) -> Result<Entry, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let date = match non_empty(&self.date) {
            None => {
                errors.add(fields::DATE, "The Date field is required.");
                None
            }
            Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add(fields::DATE, not_valid_for(raw, "Date"));
                    None
                }
            },
        };

        let activity_id = match non_empty(&self.activity_id) {
            None => {
                errors.add(fields::ACTIVITY, "The Activity field is required.");
                None
            }
            Some(raw) => match raw.parse::<u32>() {
                Ok(id) if activities.get(id).is_some() => Some(id),
                _ => {
                    errors.add(fields::ACTIVITY, "Please select a valid activity.");
                    None
                }
            },
        };

        // An empty duration binds as zero so the positive-duration rule reports it.
        let duration = match non_empty(&self.duration) {
            None => 0.0,
            Some(raw) => match parse_number(raw) {
                Some(value) => value,
                None => {
                    errors.add(fields::DURATION, not_valid_for(raw, "Duration"));
                    0.0
                }
            },
        };
        validate_duration(&mut errors, duration);

        let distance = match non_empty(&self.distance) {
            None => None,
            Some(raw) => match parse_number(raw) {
                Some(value) if value < 0.0 => {
                    errors.add(fields::DISTANCE, "The distance field must not be negative.");
                    None
                }
                Some(value) => Some(value),
                None => {
                    errors.add(fields::DISTANCE, not_valid_for(raw, "Distance"));
                    None
                }
            },
        };

        // Blank notes bind as absent; anything else is stored as typed.
        let notes = self.notes.clone().filter(|n| !n.trim().is_empty());
        if let Some(notes) = &notes {
            if notes.chars().count() > NOTES_MAX_LENGTH {
                errors.add(
                    fields::NOTES,
                    "The Notes field cannot be longer than 200 characters.",
                );
            }
        }

        match (date, activity_id) {
            (Some(date), Some(activity_id)) if errors.is_empty() => Ok(Entry {
                id: self.entry_id().unwrap_or_default(),
                date,
                activity_id,
                duration,
                distance,
                notes,
                exclude: self.is_excluded(),
            }),
            _ => Err(errors),
        }
    }
}

/// Duration must be positive and at most a day, unless binding already
/// flagged the field.
pub fn validate_duration(errors: &mut ValidationErrors, duration: f64) {
    if !errors.is_valid_field(fields::DURATION) {
        return;
    }
    if duration <= 0.0 {
        errors.add(fields::DURATION, DURATION_MUST_BE_POSITIVE);
    } else if duration > DURATION_MAX_MINUTES {
        errors.add(fields::DURATION, DURATION_TOO_LONG);
    }
}

/// Parse an entry id from a path, query or form value.
pub fn parse_entry_id(raw: Option<&str>) -> Option<EntryId> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn not_valid_for(raw: &str, label: &str) -> String {
    format!("The value '{}' is not valid for {}.", raw, label)
}
