//! Error types for the notelet service.

use thiserror::Error;

/// Result type alias using notelet's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notelet operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A path identifier could not be parsed into a note id
    #[error("Invalid note ID: {0}")]
    InvalidId(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
