//! notes-store: In-memory storage and the note service
//!
//! This crate provides:
//! - [`Store`]: a mutex-guarded map of notes, the single source of truth
//! - [`NoteService`]: field validation, id/timestamp generation and
//!   not-found translation on top of the store
//!
//! # Usage
//!
//! ```rust
//! use notes_store::{NoteService, Store};
//!
//! let service = NoteService::new(Store::new());
//!
//! let note = service.create("  Groceries ", Some("milk\n")).unwrap();
//! assert_eq!(note.title, "Groceries");
//!
//! let found = service.list(Some("grocer"));
//! assert_eq!(found.len(), 1);
//! ```
//!
//! The store is volatile: notes live only as long as the process.

pub mod error;
pub mod service;
pub mod store;

pub use error::{ServiceError, ServiceResult};
pub use service::NoteService;
pub use store::Store;

// Re-export notes-core for downstream crates
pub use notes_core;
