//! Repository trait for note storage backends.
//!
//! The trait defines the interface a concrete store must satisfy, enabling
//! pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Note, NoteDraft};

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List all notes in insertion order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Insert a new note and return the persisted row.
    ///
    /// The store assigns the identifier and applies the `archived` default
    /// when the draft leaves it absent.
    async fn insert(&self, draft: NoteDraft) -> Result<Note>;

    /// Fetch a note by id. Absence is not an error.
    async fn fetch(&self, id: Uuid) -> Result<Option<Note>>;

    /// Replace a note's attributes and return the updated row, or `None`
    /// if no note with the given id exists.
    async fn replace(&self, id: Uuid, draft: NoteDraft) -> Result<Option<Note>>;

    /// Delete a note by id, returning the number of rows removed (0 or 1).
    async fn delete(&self, id: Uuid) -> Result<u64>;

    /// Delete all notes, returning the number of rows removed.
    async fn delete_all(&self) -> Result<u64>;
}
