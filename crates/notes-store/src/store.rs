//! In-memory note store.
//!
//! The `Store` type is the single source of truth for notes. Every
//! operation runs under one mutex owned by the instance, so operations are
//! linearizable: each one observes the complete effect of every operation
//! that acquired the lock before it, and none of a later one.

use std::collections::HashMap;

use chrono::Utc;
use notes_core::{Note, NoteId};
use parking_lot::Mutex;

/// Thread-safe keyed collection of notes.
///
/// Callers only ever receive clones of stored notes. The map itself is
/// never exposed, so all mutation goes through the methods below.
///
/// The lock is not reentrant. No method calls another while holding it and
/// no guard outlives its method, so reentrancy is never needed.
#[derive(Debug, Default)]
pub struct Store {
    notes: Mutex<HashMap<NoteId, Note>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notes, in no particular order.
    pub fn list(&self) -> Vec<Note> {
        let notes = self.notes.lock();
        notes.values().cloned().collect()
    }

    /// Get a note by id.
    pub fn get(&self, id: NoteId) -> Option<Note> {
        self.notes.lock().get(&id).cloned()
    }

    /// Insert a note under its own id, replacing any note with that id.
    ///
    /// Ids are expected to be fresh; no collision check is made.
    pub fn create(&self, note: Note) -> Note {
        let mut notes = self.notes.lock();
        notes.insert(note.id, note.clone());
        tracing::debug!(note_id = %note.id, "Note inserted into store");
        note
    }

    /// Replace the stored note with a revised copy.
    ///
    /// `id` and `created_at` are kept; `title` and `content` are replaced
    /// where given; `updated_at` moves to the current time. The whole record
    /// is swapped, so of two racing updates the later one wins entirely.
    pub fn update(
        &self,
        id: NoteId,
        title: Option<String>,
        content: Option<String>,
    ) -> Option<Note> {
        let mut notes = self.notes.lock();
        let existing = notes.get(&id)?;

        let updated = existing.revised(title, content, Utc::now());
        notes.insert(id, updated.clone());
        tracing::debug!(note_id = %id, "Note replaced in store");

        Some(updated)
    }

    /// Remove a note. Returns whether it was present.
    pub fn delete(&self, id: NoteId) -> bool {
        let removed = self.notes.lock().remove(&id).is_some();
        if removed {
            tracing::debug!(note_id = %id, "Note removed from store");
        }
        removed
    }

    /// Number of live notes.
    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    /// Returns true if the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
