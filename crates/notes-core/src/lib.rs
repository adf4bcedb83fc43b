//! notes-core: Core types and field rules for the notes service
//!
//! This crate provides:
//! - [`Note`] and [`NoteId`], the entity served over HTTP
//! - The title/content normalization rules shared by create and update
//! - [`ValidationError`], the error raised when a field breaks those rules

pub mod types;
pub mod validation;

pub use types::{Note, NoteId};
pub use validation::{
    MAX_CONTENT_CHARS, MAX_TITLE_CHARS, NoteFields, NotePatch, ValidationError,
    normalize_content, normalize_title,
};
