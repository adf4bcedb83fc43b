//! Note service: validation and orchestration on top of the store.
//!
//! The service turns raw request fields into normalized notes, stamps ids
//! and timestamps, and converts the store's `None`/`false` into
//! [`ServiceError::NotFound`]. It holds no state besides its [`Store`], so a
//! single instance can be shared by every request handler.

use chrono::Utc;
use notes_core::{Note, NoteFields, NoteId, NotePatch};

use crate::Store;
use crate::error::{ServiceError, ServiceResult};

/// Validated CRUD operations for notes.
#[derive(Debug, Default)]
pub struct NoteService {
    store: Store,
}

impl NoteService {
    /// Create a service backed by the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List notes, optionally keeping only titles that contain `filter`.
    ///
    /// Matching is a case-insensitive substring test against the trimmed
    /// filter. A missing, empty or whitespace-only filter returns every note.
    pub fn list(&self, filter: Option<&str>) -> Vec<Note> {
        let notes = self.store.list();

        let needle = filter.map(|q| q.trim().to_lowercase()).unwrap_or_default();
        if needle.is_empty() {
            tracing::debug!(count = notes.len(), "Listing notes");
            return notes;
        }

        let matching: Vec<Note> = notes
            .into_iter()
            .filter(|note| note.title.to_lowercase().contains(&needle))
            .collect();

        tracing::debug!(count = matching.len(), filter = %needle, "Listing filtered notes");
        matching
    }

    /// Get a single note.
    pub fn get(&self, id: NoteId) -> ServiceResult<Note> {
        self.store.get(id).ok_or_else(|| {
            tracing::info!(note_id = %id, "Note not found");
            ServiceError::NotFound(id)
        })
    }

    /// Validate and create a new note.
    ///
    /// The title is trimmed and must be non-empty; content is right-stripped
    /// and defaults to empty. Both timestamps get the same instant.
    pub fn create(&self, title: &str, content: Option<&str>) -> ServiceResult<Note> {
        let fields = NoteFields::new(title, content)?;
        let note = Note::new(fields.title, fields.content, Utc::now());

        let created = self.store.create(note);
        tracing::info!(note_id = %created.id, "Note created");

        Ok(created)
    }

    /// Validate and apply a partial update.
    ///
    /// Present fields follow the creation rules; absent ones stay as stored.
    /// Validation runs before the store is touched.
    pub fn update(
        &self,
        id: NoteId,
        title: Option<&str>,
        content: Option<&str>,
    ) -> ServiceResult<Note> {
        let NotePatch { title, content } = NotePatch::new(title, content)?;

        match self.store.update(id, title, content) {
            Some(updated) => {
                tracing::info!(note_id = %id, "Note updated");
                Ok(updated)
            }
            None => {
                tracing::info!(note_id = %id, "Update attempted on missing note");
                Err(ServiceError::NotFound(id))
            }
        }
    }

    /// Delete a note.
    pub fn delete(&self, id: NoteId) -> ServiceResult<()> {
        if self.store.delete(id) {
            tracing::info!(note_id = %id, "Note deleted");
            Ok(())
        } else {
            tracing::info!(note_id = %id, "Delete attempted on missing note");
            Err(ServiceError::NotFound(id))
        }
    }

    /// Number of live notes.
    pub fn count(&self) -> usize {
        self.store.len()
    }
}

// ============================================================================
// Tests
// ============================================================================
