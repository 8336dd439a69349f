// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory entry repository.

use crate::db::EntryRepository;
use crate::error::AppError;
use crate::models::{Entry, EntryId};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Entry repository backed by a concurrent map.
pub struct InMemoryEntryRepository {
    entries: Option<DashMap<EntryId, Entry>>,
    next_id: AtomicU64,
}

impl Default for InMemoryEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEntryRepository {
    /// Create an empty repository. Ids start at 1.
    pub fn new() -> Self {
        Self {
            entries: Some(DashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a repository whose every operation fails (offline mode).
    ///
    /// Useful for asserting that a request path never touches storage.
    pub fn new_offline() -> Self {
        Self {
            entries: None,
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a repository pre-populated with sample entries.
    pub fn with_sample_entries() -> Self {
        let repo = Self::new();
        for entry in sample_entries() {
            repo.insert(entry);
        }
        tracing::info!(count = repo.len(), "Seeded sample entries");
        repo
    }

    /// Number of stored entries (0 when offline).
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Helper to get the map or return an error if offline.
    fn get_entries(&self) -> Result<&DashMap<EntryId, Entry>, AppError> {
        self.entries
            .as_ref()
            .ok_or_else(|| AppError::Database("Repository not available (offline mode)".to_string()))
    }

    fn insert(&self, mut entry: Entry) -> EntryId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        entry.id = id;
        if let Some(entries) = &self.entries {
            entries.insert(id, entry);
        }
        id
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn list_entries(&self) -> Result<Vec<Entry>, AppError> {
        let mut list: Vec<Entry> = self
            .get_entries()?
            .iter()
            .map(|item| item.value().clone())
            .collect();
        list.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(list)
    }

    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>, AppError> {
        Ok(self.get_entries()?.get(&id).map(|item| item.value().clone()))
    }

    async fn add_entry(&self, entry: Entry) -> Result<EntryId, AppError> {
        self.get_entries()?;
        Ok(self.insert(entry))
    }

    async fn update_entry(&self, entry: Entry) -> Result<(), AppError> {
        let entries = self.get_entries()?;
        match entries.get_mut(&entry.id) {
            Some(mut stored) => {
                *stored = entry;
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Entry {} not found", entry.id))),
        }
    }

    async fn delete_entry(&self, id: EntryId) -> Result<(), AppError> {
        self.get_entries()?
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", id)))
    }
}

/// Sample log used when seeding is enabled.
fn sample_entries() -> Vec<Entry> {
    let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        Entry::new(day(2024, 1, 2), 1, 10.0).with_notes("Shooting hoops after work"),
        Entry::new(day(2024, 1, 2), 6, 12.0).with_distance(1.5),
        Entry::new(day(2024, 1, 3), 2, 45.0).with_distance(12.0),
        Entry::new(day(2024, 1, 4), 3, 180.0)
            .with_distance(8.0)
            .with_notes("Long weekend hike")
            .excluded(),
        Entry::new(day(2024, 1, 5), 5, 30.0),
        Entry::new(day(2024, 1, 6), 7, 25.0).with_notes("Pool laps"),
        Entry::new(day(2024, 1, 7), 8, 40.0),
    ]
}
