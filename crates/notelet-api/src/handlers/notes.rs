//! Note endpoint handlers.
//!
//! Each handler issues one store call, then maps the result or failure to
//! exactly one response. Not-found is decided here (a zero-row result),
//! never by the error mapper.

use axum::extract::{Host, OriginalUri, Path, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;

use notelet_core::{parse_note_id, NoteRepository};

use crate::error::ApiError;
use crate::wire::{to_api, to_storage, ApiNote, NoteDocument, NoteListDocument};
use crate::AppState;

/// Full URL of a request (query stripped).
fn full_url(host: &str, uri: &Uri) -> String {
    format!("http://{}{}", host, uri.path())
}

fn extract_draft(document: Option<Json<NoteDocument>>) -> Result<notelet_core::NoteDraft, ApiError> {
    let document = document.map(|Json(d)| d).unwrap_or_default();
    to_storage(document.data.as_ref())?.ok_or_else(|| {
        ApiError::BadRequest("request document is missing the data member".to_string())
    })
}

/// Get all notes.
///
/// # Returns
/// - 200 OK with `{"data": [...]}`, an empty array when there are none
/// - 500 Internal Server Error if the store call fails
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<NoteListDocument>, ApiError> {
    let notes = state.db.notes.list().await?;
    Ok(Json(NoteListDocument {
        data: notes.into_iter().map(ApiNote::from).collect(),
    }))
}

/// Create a new note and return it.
///
/// # Returns
/// - 201 Created with the stored resource and a `Location` header pointing
///   at the new note (request URL without its query string)
/// - 400 Bad Request if the document is missing `data` or `data.attributes`
/// - 500 Internal Server Error if the store call fails
pub async fn create_note(
    State(state): State<AppState>,
    Host(host): Host,
    OriginalUri(uri): OriginalUri,
    document: Option<Json<NoteDocument>>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = extract_draft(document)?;
    let note = state.db.notes.insert(draft).await?;
    let location = format!("{}/{}", full_url(&host, &uri), note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NoteDocument {
            data: to_api(Some(note)),
        }),
    ))
}

/// Get a note.
///
/// A missing note is a valid empty result: the response is 200 with
/// `"data": null`, not a 404.
///
/// # Returns
/// - 200 OK with `{"data": <note>}` or `{"data": null}`
/// - 400 Bad Request if the id is not a valid identifier
/// - 500 Internal Server Error if the store call fails
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteDocument>, ApiError> {
    let note_id = parse_note_id(&id)?;
    let note = state.db.notes.fetch(note_id).await?;
    Ok(Json(NoteDocument { data: to_api(note) }))
}

/// Update a note and return the updated note.
///
/// The three attributes are replaced wholesale; an absent `archived`
/// resolves to the schema default.
///
/// # Returns
/// - 200 OK with the updated resource
/// - 400 Bad Request if the id or the document is invalid
/// - 404 Not Found if no note with the id exists
/// - 500 Internal Server Error if the store call fails
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    document: Option<Json<NoteDocument>>,
) -> Result<Json<NoteDocument>, ApiError> {
    let note_id = parse_note_id(&id)?;
    let draft = extract_draft(document)?;
    let note = state
        .db
        .notes
        .replace(note_id, draft)
        .await?
        .ok_or_else(|| ApiError::NotFound(id))?;
    Ok(Json(NoteDocument {
        data: to_api(Some(note)),
    }))
}

/// Delete a note.
///
/// # Returns
/// - 204 No Content on success
/// - 400 Bad Request if the id is not a valid identifier
/// - 404 Not Found if no note with the id exists
/// - 500 Internal Server Error if the store call fails
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let note_id = parse_note_id(&id)?;
    let removed = state.db.notes.delete(note_id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Delete all notes.
///
/// # Returns
/// - 204 No Content on success, regardless of how many notes existed
/// - 500 Internal Server Error if the store call fails
pub async fn delete_all_notes(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.db.notes.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_strips_query() {
        let uri: Uri = "/notes?sort=title".parse().unwrap();
        assert_eq!(full_url("localhost:3000", &uri), "http://localhost:3000/notes");
    }

    #[test]
    fn test_full_url_without_query() {
        let uri: Uri = "/notes".parse().unwrap();
        assert_eq!(full_url("example.com", &uri), "http://example.com/notes");
    }

    #[test]
    fn test_extract_draft_missing_body_is_rejected() {
        let err = extract_draft(None).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_extract_draft_missing_data_is_rejected() {
        let document = Json(NoteDocument { data: None });
        let err = extract_draft(Some(document)).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_extract_draft_pulls_attributes() {
        let document: NoteDocument = serde_json::from_str(
            r#"{"data":{"type":"note","attributes":{"title":"t","archived":true}}}"#,
        )
        .unwrap();
        let draft = extract_draft(Some(Json(document))).unwrap();
        assert_eq!(draft.title.as_deref(), Some("t"));
        assert_eq!(draft.body, None);
        assert_eq!(draft.archived, Some(true));
    }
}
