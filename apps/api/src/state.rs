use std::sync::Arc;

use crate::ai::TextGenerator;
use crate::config::Config;
use crate::editor::EditorSessions;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ResumeStore,
    pub sessions: EditorSessions,
    /// Pluggable text generator so tests can stub the external AI service.
    pub ai: Arc<dyn TextGenerator>,
    #[allow(dead_code)]
    pub config: Config,
}
