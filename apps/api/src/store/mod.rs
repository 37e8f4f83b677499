//! Persistence Store — a flat collection of resume documents keyed by id,
//! mirrored in memory and rewritten wholesale to a single JSON file on every
//! mutation. A missing or corrupt file is treated as an empty collection;
//! write failures surface as a distinct `StoreError` rather than silent loss.

pub mod handlers;

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::resume::Resume;
use crate::models::roles::apply_role;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write resume store: {0}")]
    Persist(#[source] std::io::Error),

    #[error("failed to encode resume store: {0}")]
    Encode(#[source] serde_json::Error),
}

/// File-backed resume store. Cheap to clone; clones share the collection.
#[derive(Clone)]
pub struct ResumeStore {
    path: PathBuf,
    resumes: Arc<RwLock<Vec<Resume>>>,
}

impl ResumeStore {
    /// Opens the store at `path`, loading any existing collection. A missing
    /// or unreadable file yields an empty store, never an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let resumes = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<Resume>>(&contents) {
                Ok(resumes) => {
                    info!("Loaded {} resume(s) from {}", resumes.len(), path.display());
                    resumes
                }
                Err(e) => {
                    warn!(
                        "Resume store at {} is corrupt ({e}); starting empty",
                        path.display()
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        ResumeStore {
            path,
            resumes: Arc::new(RwLock::new(resumes)),
        }
    }

    /// Returns every stored resume in the collection's insertion order.
    pub fn list(&self) -> Vec<Resume> {
        self.resumes.read().expect("store lock poisoned").clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Resume> {
        self.resumes
            .read()
            .expect("store lock poisoned")
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Replace-or-append by id. Refreshes `lastModified` as part of the write
    /// and persists the full collection synchronously. Returns the stored copy.
    pub fn upsert(&self, mut resume: Resume) -> Result<Resume, StoreError> {
        resume.last_modified = Utc::now().timestamp_millis();

        let mut resumes = self.resumes.write().expect("store lock poisoned");
        match resumes.iter_mut().find(|r| r.id == resume.id) {
            Some(existing) => *existing = resume.clone(),
            None => resumes.push(resume.clone()),
        }
        self.flush(&resumes)?;
        Ok(resume)
    }

    /// Removes the resume with `id`, if present. Removing an unknown id is a
    /// no-op and does not rewrite the file.
    pub fn remove(&self, id: &str) -> Result<(), StoreError> {
        let mut resumes = self.resumes.write().expect("store lock poisoned");
        let before = resumes.len();
        resumes.retain(|r| r.id != id);
        if resumes.len() != before {
            self.flush(&resumes)?;
        }
        Ok(())
    }

    /// Builds a resume from the default skeleton, optionally pre-filled from a
    /// role template, assigns a fresh id, persists it, and returns it.
    pub fn create_with_defaults(&self, role: Option<&str>) -> Result<Resume, StoreError> {
        let mut resume = Resume::skeleton();
        if let Some(role_id) = role {
            if !apply_role(role_id, &mut resume) {
                warn!("Unknown role template '{role_id}'; creating blank resume");
            }
        }
        resume.id = Uuid::new_v4().to_string();
        self.upsert(resume)
    }

    fn flush(&self, resumes: &[Resume]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StoreError::Persist)?;
            }
        }
        let json = serde_json::to_string_pretty(resumes).map_err(StoreError::Encode)?;
        fs::write(&self.path, json).map_err(StoreError::Persist)
    }
}
