//! Field validation and normalization for notes.
//!
//! The same rules apply wherever a field enters the system:
//!
//! - title: trimmed on both ends, must be non-empty and at most
//!   [`MAX_TITLE_CHARS`] characters afterwards
//! - content: at most [`MAX_CONTENT_CHARS`] characters as received, then
//!   trailing whitespace stripped, may be empty
//!
//! Lengths count Unicode scalar values. Whitespace is Unicode whitespace plus
//! the ASCII separators U+001C..=U+001F.

use thiserror::Error;

/// Maximum title length in characters, after trimming.
pub const MAX_TITLE_CHARS: usize = 200;

/// Maximum content length in characters, before stripping.
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// A note field failed its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is empty or whitespace-only.
    #[error("title must not be empty")]
    EmptyTitle,

    /// Title exceeds the maximum length.
    #[error("title is {len} characters long, maximum is {max}")]
    TitleTooLong { len: usize, max: usize },

    /// Content exceeds the maximum length.
    #[error("content is {len} characters long, maximum is {max}")]
    ContentTooLong { len: usize, max: usize },
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trims a title and checks it is non-empty and within bounds.
pub fn normalize_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim_matches(is_blank);
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let len = trimmed.chars().count();
    if len > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong {
            len,
            max: MAX_TITLE_CHARS,
        });
    }

    Ok(trimmed.to_string())
}

/// Checks the length of content as given, then strips trailing whitespace.
pub fn normalize_content(raw: &str) -> Result<String, ValidationError> {
    let len = raw.chars().count();
    if len > MAX_CONTENT_CHARS {
        return Err(ValidationError::ContentTooLong {
            len,
            max: MAX_CONTENT_CHARS,
        });
    }

    Ok(raw.trim_end_matches(is_blank).to_string())
}

/// Normalized fields of a note about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
}

impl NoteFields {
    /// Validates creation input. Missing content becomes the empty string.
    pub fn new(title: &str, content: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: normalize_title(title)?,
            content: normalize_content(content.unwrap_or_default())?,
        })
    }
}

/// Normalized partial update. `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    /// Validates whichever fields are present, with the creation rules.
    pub fn new(title: Option<&str>, content: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: title.map(normalize_title).transpose()?,
            content: content.map(normalize_content).transpose()?,
        })
    }
}
