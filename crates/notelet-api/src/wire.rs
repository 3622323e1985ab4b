//! Wire representations and the mappers between them and storage shapes.
//!
//! The API speaks a JSON:API-like dialect: single resources travel as
//! `{"data": {"id", "type", "attributes"}}`, failures as
//! `{"errors": [{"status", "title", "detail"}]}`.

use serde::{Deserialize, Serialize};

use notelet_core::{Error, Note, NoteDraft, Result};

/// The constant resource discriminator for notes.
pub const RESOURCE_TYPE: &str = "note";

fn default_resource_type() -> String {
    RESOURCE_TYPE.to_string()
}

/// The `attributes` member of a note resource object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// A note resource object as it travels over the API.
///
/// `id` is present on responses and absent on create requests. `type` is
/// never validated on requests, matching the store-managed/constant split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default = "default_resource_type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<NoteAttributes>,
}

/// Envelope for a single note resource. `data` serializes as `null` when
/// absent; for a read that is the not-found signal, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteDocument {
    #[serde(default)]
    pub data: Option<ApiNote>,
}

/// Envelope for a list of note resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteListDocument {
    pub data: Vec<ApiNote>,
}

/// An error object returned in a response when an operation fails.
///
/// Fields are present only when provided; absent fields are omitted from
/// the wire form rather than nulled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorObject {
    pub fn new(status: u16, title: &str, detail: String) -> Self {
        Self {
            status: Some(status),
            title: Some(title.to_string()),
            detail: Some(detail),
        }
    }

    pub fn server_error() -> Self {
        Self::new(
            500,
            "Server Error",
            "The server encountered an error".to_string(),
        )
    }

    pub fn invalid_id(id: &str) -> Self {
        Self::new(400, "ID invalid", format!("ID {} invalid", id))
    }

    pub fn note_not_found(id: &str) -> Self {
        Self::new(
            404,
            "Note not found",
            format!("No note with ID {} could be found", id),
        )
    }

    pub fn malformed_request(detail: String) -> Self {
        Self::new(400, "Malformed request", detail)
    }
}

/// Envelope for one or more error objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorObject>,
}

impl From<Note> for ApiNote {
    fn from(note: Note) -> Self {
        Self {
            id: Some(note.id.to_string()),
            kind: RESOURCE_TYPE.to_string(),
            attributes: Some(NoteAttributes {
                title: note.title,
                body: note.body,
                archived: Some(note.archived),
            }),
        }
    }
}

/// Project a stored note (or absence) into its wire representation.
///
/// A pure structural projection; no validation is performed.
pub fn to_api(note: Option<Note>) -> Option<ApiNote> {
    note.map(ApiNote::from)
}

/// Extract the storage-shaped record from an API note payload (or absence).
///
/// `id` and `type` are never copied. A payload without `attributes` is
/// rejected instead of silently producing an empty record.
pub fn to_storage(resource: Option<&ApiNote>) -> Result<Option<NoteDraft>> {
    let Some(resource) = resource else {
        return Ok(None);
    };
    let attributes = resource.attributes.as_ref().ok_or_else(|| {
        Error::InvalidInput("request document is missing the data.attributes member".to_string())
    })?;
    Ok(Some(NoteDraft {
        title: attributes.title.clone(),
        body: attributes.body.clone(),
        archived: attributes.archived,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn stored_note() -> Note {
        Note {
            id: Uuid::nil(),
            title: Some("Test title".to_string()),
            body: Some("Test body".to_string()),
            archived: false,
        }
    }

    #[test]
    fn test_to_api_absent_input_yields_none() {
        assert!(to_api(None).is_none());
    }

    #[test]
    fn test_to_storage_absent_input_yields_none() {
        assert!(to_storage(None).unwrap().is_none());
    }

    #[test]
    fn test_to_api_projects_all_fields() {
        let api = to_api(Some(stored_note())).unwrap();
        assert_eq!(api.id.as_deref(), Some(&Uuid::nil().to_string()[..]));
        assert_eq!(api.kind, "note");
        let attrs = api.attributes.unwrap();
        assert_eq!(attrs.title.as_deref(), Some("Test title"));
        assert_eq!(attrs.body.as_deref(), Some("Test body"));
        assert_eq!(attrs.archived, Some(false));
    }

    #[test]
    fn test_to_storage_copies_attributes_only() {
        let api = ApiNote {
            id: Some("ignored".to_string()),
            kind: "note".to_string(),
            attributes: Some(NoteAttributes {
                title: Some("t".to_string()),
                body: Some("b".to_string()),
                archived: Some(true),
            }),
        };
        let draft = to_storage(Some(&api)).unwrap().unwrap();
        assert_eq!(draft.title.as_deref(), Some("t"));
        assert_eq!(draft.body.as_deref(), Some("b"));
        assert_eq!(draft.archived, Some(true));
    }

    #[test]
    fn test_to_storage_missing_attributes_is_rejected() {
        let api = ApiNote {
            id: None,
            kind: "note".to_string(),
            attributes: None,
        };
        match to_storage(Some(&api)) {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("data.attributes")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_api_note_without_id_omits_the_key() {
        let api = ApiNote {
            id: None,
            kind: "note".to_string(),
            attributes: Some(NoteAttributes {
                title: None,
                body: None,
                archived: Some(false),
            }),
        };
        let json = serde_json::to_string(&api).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"type\":\"note\""));
        assert!(!json.contains("\"title\""));
    }

    #[test]
    fn test_note_document_serializes_absent_data_as_null() {
        let json = serde_json::to_string(&NoteDocument { data: None }).unwrap();
        assert_eq!(json, "{\"data\":null}");
    }

    #[test]
    fn test_request_without_type_member_deserializes() {
        let json = r#"{"data":{"attributes":{"title":"t","body":"b","archived":false}}}"#;
        let document: NoteDocument = serde_json::from_str(json).unwrap();
        let api = document.data.unwrap();
        assert_eq!(api.kind, "note");
        assert_eq!(api.attributes.unwrap().title.as_deref(), Some("t"));
    }

    #[test]
    fn test_request_without_data_member_deserializes_to_none() {
        let document: NoteDocument = serde_json::from_str("{}").unwrap();
        assert!(document.data.is_none());
    }

    #[test]
    fn test_error_object_serializes_all_provided_fields() {
        let json = serde_json::to_string(&ErrorObject::server_error()).unwrap();
        assert_eq!(
            json,
            "{\"status\":500,\"title\":\"Server Error\",\"detail\":\"The server encountered an error\"}"
        );
    }

    #[test]
    fn test_error_object_omits_absent_fields() {
        let error = ErrorObject {
            status: Some(404),
            title: None,
            detail: None,
        };
        assert_eq!(serde_json::to_string(&error).unwrap(), "{\"status\":404}");
    }

    #[test]
    fn test_invalid_id_error_text() {
        let error = ErrorObject::invalid_id("badID");
        assert_eq!(error.title.as_deref(), Some("ID invalid"));
        assert_eq!(error.detail.as_deref(), Some("ID badID invalid"));
    }

    #[test]
    fn test_note_not_found_error_text() {
        let id = Uuid::nil().to_string();
        let error = ErrorObject::note_not_found(&id);
        assert_eq!(error.status, Some(404));
        assert_eq!(
            error.detail.unwrap(),
            format!("No note with ID {} could be found", id)
        );
    }
}
