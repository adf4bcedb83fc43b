//! Error types for the note service.
//!
//! The [`Store`](crate::Store) itself never fails: a missing note is an
//! ordinary `None`/`false`. These errors are produced by
//! [`NoteService`](crate::NoteService) only.

use notes_core::{NoteId, ValidationError};
use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors that can occur during service operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Input failed field validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No live note has this id.
    #[error("note not found: {0}")]
    NotFound(NoteId),
}
