//! Entry storage.

pub mod memory;

pub use memory::InMemoryEntryRepository;

use crate::error::AppError;
use crate::models::{Entry, EntryId};
use async_trait::async_trait;

/// Storage operations the entry handlers depend on.
///
/// Implementations own id assignment and their own concurrency control.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// All entries, newest date first (ties broken by highest id).
    async fn list_entries(&self) -> Result<Vec<Entry>, AppError>;

    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>, AppError>;

    /// Store a new entry and return its assigned id. The incoming id is ignored.
    async fn add_entry(&self, entry: Entry) -> Result<EntryId, AppError>;

    /// Replace every field of an existing entry.
    ///
    /// Returns `AppError::NotFound` when no entry has `entry.id`.
    async fn update_entry(&self, entry: Entry) -> Result<(), AppError>;

    /// Remove an entry. Returns `AppError::NotFound` when it does not exist.
    async fn delete_entry(&self, id: EntryId) -> Result<(), AppError>;
}
