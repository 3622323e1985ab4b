//! # notelet-core
//!
//! Core types, traits, and abstractions for the notelet notes service.
//!
//! This crate provides the note data model, the repository trait that
//! storage backends implement, and the shared error type.

pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{new_note_id, parse_note_id, Note, NoteDraft};
pub use traits::NoteRepository;
