//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::NoteService;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Built once at startup around the process's only [`NoteService`]; every
/// clone points at that same service. Extract it in handlers with
/// `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Note service (and through it, the store).
    service: Arc<NoteService>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(service: NoteService, config: ServerConfig) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the note service.
    pub fn service(&self) -> &NoteService {
        &self.service
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("notes", &self.service.count())
            .finish_non_exhaustive()
    }
}
