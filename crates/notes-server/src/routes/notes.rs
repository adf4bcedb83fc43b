//! Note CRUD routes.
//!
//! This module implements the note endpoints:
//! - GET /notes?q= - List notes, optionally filtered by title substring
//! - GET /notes/{id} - Read one note
//! - POST /notes - Create a note
//! - PATCH /notes/{id} - Partially update a note
//! - DELETE /notes/{id} - Delete a note
//!
//! Handlers call the synchronous [`NoteService`](notes_store::NoteService)
//! directly: every operation is bounded in-memory work behind one lock.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use notes_core::Note;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extract::{JsonBody, NoteIdPath};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Query string for GET /notes.
#[derive(Debug, Default)]
pub struct ListNotesQuery {
    /// Case-insensitive title substring.
    pub q: Option<String>,
}

impl ListNotesQuery {
    /// Picks `q` out of the raw pairs. A repeated key keeps its last value;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value);
        Self { q }
    }
}

/// Request body for POST /notes.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    /// Title; trimmed and required to be non-empty.
    pub title: String,
    /// Body; defaults to empty.
    #[serde(default)]
    pub content: Option<String>,
}

/// Request body for PATCH /notes/{id}.
///
/// Omitted and `null` fields both mean "leave unchanged".
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /notes - List notes.
///
/// # Response
///
/// - 200 OK: array of notes, unordered
async fn list_notes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Note>> {
    let query = ListNotesQuery::from_pairs(pairs);
    Json(state.service().list(query.q.as_deref()))
}

/// GET /notes/{id} - Read one note.
///
/// # Response
///
/// - 200 OK: the note
/// - 404 Not Found: unknown id
/// - 422 Unprocessable Entity: id is not a UUID
async fn get_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<Json<Note>> {
    Ok(Json(state.service().get(id)?))
}

/// POST /notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": "Groceries", "content": "milk" }` (`content` optional)
///
/// # Response
///
/// - 201 Created: the stored note
/// - 422 Unprocessable Entity: blank/overlong title, overlong content, or
///   malformed body
async fn create_note(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let note = state
        .service()
        .create(&request.title, request.content.as_deref())?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// PATCH /notes/{id} - Partially update a note.
///
/// # Response
///
/// - 200 OK: the updated note
/// - 404 Not Found: unknown id
/// - 422 Unprocessable Entity: invalid field or malformed body
async fn update_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
    JsonBody(request): JsonBody<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    let note = state.service().update(
        id,
        request.title.as_deref(),
        request.content.as_deref(),
    )?;

    Ok(Json(note))
}

/// DELETE /notes/{id} - Delete a note.
///
/// # Response
///
/// - 204 No Content
/// - 404 Not Found: unknown id
async fn delete_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<StatusCode> {
    state.service().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).patch(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================
