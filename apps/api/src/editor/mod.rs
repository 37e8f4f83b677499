//! Editor Orchestrator — live drafts, section-scoped edit operations, the
//! derived completeness score, and the 30-second autosave sweep.

pub mod handlers;
pub mod ops;
pub mod score;
pub mod sessions;

pub use sessions::{spawn_autosave, EditorSessions, AUTOSAVE_INTERVAL};
