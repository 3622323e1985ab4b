//! Core data models for the notelet service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// A persisted note.
///
/// The store owns this state; handlers only hold transient copies for the
/// duration of a request. `archived` is always concrete once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: Uuid,
    pub title: Option<String>,
    pub body: Option<String>,
    pub archived: bool,
}

/// Storage-shaped input for creating or replacing a note.
///
/// An absent `archived` resolves to the schema default (`false`) at the
/// store, on insert and on replace alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub body: Option<String>,
    pub archived: Option<bool>,
}

/// Generate a fresh note id.
///
/// UUIDv7 embeds a Unix timestamp, so ids sort chronologically and a plain
/// `ORDER BY id` lists notes in insertion order.
pub fn new_note_id() -> Uuid {
    Uuid::now_v7()
}

/// Parse a request path identifier into a note id.
pub fn parse_note_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_id_accepts_canonical_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_note_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_note_id_rejects_garbage() {
        let err = parse_note_id("badID").unwrap_err();
        match err {
            Error::InvalidId(raw) => assert_eq!(raw, "badID"),
            other => panic!("Expected InvalidId, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_note_id_rejects_empty() {
        assert!(parse_note_id("").is_err());
    }

    #[test]
    fn test_new_note_ids_are_v7() {
        assert_eq!(new_note_id().get_version_num(), 7);
    }

    #[test]
    fn test_new_note_ids_sort_in_creation_order() {
        let first = new_note_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = new_note_id();
        assert!(first < second);
    }

    #[test]
    fn test_note_draft_default_is_all_absent() {
        let draft = NoteDraft::default();
        assert!(draft.title.is_none());
        assert!(draft.body.is_none());
        assert!(draft.archived.is_none());
    }
}
