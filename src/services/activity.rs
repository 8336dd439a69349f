// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity type catalog.
//!
//! Read-only reference data used to populate the activity selection list and
//! to resolve activity names on the entry pages.

use crate::models::activity::{Activity, ActivityId};
use std::fs;
use std::path::Path;

/// Name shown for entries whose activity is not in the catalog.
pub const UNKNOWN_ACTIVITY: &str = "Unknown";

const BUILTIN_ACTIVITIES: &[(ActivityId, &str)] = &[
    (1, "Basketball"),
    (2, "Biking"),
    (3, "Hiking"),
    (4, "Kayaking"),
    (5, "Pole Vaulting"),
    (6, "Running"),
    (7, "Swimming"),
    (8, "Weight Lifting"),
];

/// Service holding the list of selectable activity types.
#[derive(Debug, Clone)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl Default for ActivityCatalog {
    /// Built-in activity list.
    fn default() -> Self {
        Self {
            activities: BUILTIN_ACTIVITIES
                .iter()
                .map(|&(id, name)| Activity::new(id, name))
                .collect(),
        }
    }
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Load activities from a JSON file (`[{"id": 1, "name": "Running"}, ...]`).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ActivityCatalogError> {
        let json_data = fs::read_to_string(path.as_ref())
            .map_err(|e| ActivityCatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load activities from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, ActivityCatalogError> {
        let mut activities: Vec<Activity> = serde_json::from_str(json_data)
            .map_err(|e| ActivityCatalogError::ParseError(e.to_string()))?;

        if activities.is_empty() {
            return Err(ActivityCatalogError::Empty);
        }

        activities.sort_by_key(|a| a.id);
        if let Some(pair) = activities.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(ActivityCatalogError::DuplicateId(pair[0].id));
        }

        tracing::info!(count = activities.len(), "Loaded activities");
        Ok(Self { activities })
    }

    /// All activities, ordered by id.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Display name for an activity id.
    pub fn name_of(&self, id: ActivityId) -> &str {
        self.get(id).map_or(UNKNOWN_ACTIVITY, |a| a.name.as_str())
    }

    /// Id/name pairs for the selection control.
    pub fn selection_list(&self) -> Vec<(ActivityId, &str)> {
        self.activities
            .iter()
            .map(|a| (a.id, a.name.as_str()))
            .collect()
    }
}

/// Errors from loading the activity catalog.
#[derive(Debug, thiserror::Error)]
pub enum ActivityCatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse activities: {0}")]
    ParseError(String),

    #[error("Activity list is empty")]
    Empty,

    #[error("Duplicate activity id: {0}")]
    DuplicateId(ActivityId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ActivityCatalog::default();

        assert_eq!(catalog.activities().len(), 8);
        assert_eq!(catalog.name_of(6), "Running");
        assert_eq!(catalog.name_of(99), UNKNOWN_ACTIVITY);
        assert_eq!(catalog.selection_list()[0], (1, "Basketball"));
    }

    #[test]
    fn test_load_from_json_sorts_by_id() {
        let catalog = ActivityCatalog::load_from_json(
            r#"[{"id": 3, "name": "Rowing"}, {"id": 1, "name": "Yoga"}]"#,
        )
        .unwrap();

        let ids: Vec<ActivityId> = catalog.activities().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(catalog.name_of(3), "Rowing");
    }

    #[test]
    fn test_load_from_json_rejects_bad_input() {
        assert!(matches!(
            ActivityCatalog::load_from_json("not json"),
            Err(ActivityCatalogError::ParseError(_))
        ));
        assert!(matches!(
            ActivityCatalog::load_from_json("[]"),
            Err(ActivityCatalogError::Empty)
        ));
        assert!(matches!(
            ActivityCatalog::load_from_json(r#"[{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]"#),
            Err(ActivityCatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activities.json");
        fs::write(&path, r#"[{"id": 10, "name": "Climbing"}]"#).unwrap();

        let catalog = ActivityCatalog::load_from_file(&path).unwrap();
        assert_eq!(catalog.name_of(10), "Climbing");

        assert!(matches!(
            ActivityCatalog::load_from_file(dir.path().join("missing.json")),
            Err(ActivityCatalogError::IoError(_))
        ));
    }
}
