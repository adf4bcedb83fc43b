//! Core data types for the notes service.
//!
//! A [`Note`] is a title/content pair with an immutable identity
//! (`id`, `created_at`) and a last-modified timestamp. Values of these types
//! are plain data: the store hands out clones, so holding a `Note` never
//! gives access to the stored record.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize`; the
//! serde representation is the JSON shape served over HTTP.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a UUID v4 and serializes as the plain UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Core Domain Types
// ============================================================================

/// A note: the persisted entity of the service.
///
/// `id` and `created_at` never change once the note exists. `title` and
/// `content` are replaced by updates, and every update moves `updated_at`
/// forward, so `created_at <= updated_at` holds for the note's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for this note.
    pub id: NoteId,

    /// Trimmed, non-empty title.
    pub title: String,

    /// Body text with trailing whitespace stripped. May be empty.
    pub content: String,

    /// When the note was created (UTC).
    pub created_at: DateTime<Utc>,

    /// When the note was last modified (UTC).
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a fresh id, stamped with `now` for both timestamps.
    ///
    /// The fields are stored as given; callers normalize them first.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds the successor record of this note.
    ///
    /// Keeps `id` and `created_at`, replaces `title`/`content` where a value
    /// is given, and sets `updated_at` to `now`. If `now` does not lie after
    /// the current `updated_at` (coarse or stepped-back clock), the new
    /// timestamp is bumped one nanosecond past it instead.
    #[must_use]
    pub fn revised(
        &self,
        title: Option<String>,
        content: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };

        Self {
            id: self.id,
            title: title.unwrap_or_else(|| self.title.clone()),
            content: content.unwrap_or_else(|| self.content.clone()),
            created_at: self.created_at,
            updated_at,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
