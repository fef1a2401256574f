pub mod config;
pub mod controllers;
pub mod middleware;
pub mod notes;

use std::sync::Arc;

use notes::NoteStore;

/// Shared state handed to every request handler via `web::Data`.
pub struct AppState {
    pub store: Arc<NoteStore>,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}
