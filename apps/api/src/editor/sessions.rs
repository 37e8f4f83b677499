//! Editor sessions — the live in-memory drafts. Edit operations mutate the
//! draft only; the explicit save endpoint and the periodic autosave sweep
//! share the store's upsert path, so the two persistence triggers are
//! idempotent with respect to each other.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::{debug, error, info};

use crate::models::resume::Resume;
use crate::store::{ResumeStore, StoreError};

/// Wall-clock interval between autosave sweeps while the service runs.
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

/// Registry of open drafts keyed by resume id. Cheap to clone.
#[derive(Clone, Default)]
pub struct EditorSessions {
    open: Arc<RwLock<HashMap<String, Resume>>>,
}

impl EditorSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens (or refreshes) a draft from the store. Returns `None` when the
    /// id has no stored document.
    pub fn open(&self, store: &ResumeStore, id: &str) -> Option<Resume> {
        let resume = store.get_by_id(id)?;
        self.open
            .write()
            .expect("sessions lock poisoned")
            .insert(id.to_string(), resume.clone());
        Some(resume)
    }

    /// The current draft, if one is open.
    pub fn get(&self, id: &str) -> Option<Resume> {
        self.open
            .read()
            .expect("sessions lock poisoned")
            .get(id)
            .cloned()
    }

    /// Applies `mutate` to the draft for `id`, opening one from the store on
    /// first touch. Returns the updated draft, or `None` when the id is
    /// unknown to both the registry and the store.
    ///
    /// Last write wins: a slow AI result applied here after a manual edit
    /// overwrites that edit, with no conflict detection.
    pub fn with_draft(
        &self,
        store: &ResumeStore,
        id: &str,
        mutate: impl FnOnce(&mut Resume),
    ) -> Option<Resume> {
        let mut open = self.open.write().expect("sessions lock poisoned");
        if !open.contains_key(id) {
            let resume = store.get_by_id(id)?;
            open.insert(id.to_string(), resume);
        }
        let draft = open.get_mut(id).expect("draft just inserted");
        mutate(draft);
        Some(draft.clone())
    }

    /// Persists the draft for `id` immediately. Returns the stored copy with
    /// its refreshed timestamp (also reflected back into the draft).
    pub fn save(&self, store: &ResumeStore, id: &str) -> Option<Result<Resume, StoreError>> {
        let snapshot = self.get(id)?;
        let result = store.upsert(snapshot.clone());
        if let Ok(stored) = &result {
            self.write_back(id, &snapshot, stored.clone());
        }
        Some(result)
    }

    /// Persists every open draft. Returns the number saved; failures are
    /// logged and do not stop the sweep.
    pub fn sweep(&self, store: &ResumeStore) -> usize {
        let snapshots: Vec<Resume> = self
            .open
            .read()
            .expect("sessions lock poisoned")
            .values()
            .cloned()
            .collect();
        let mut saved = 0;
        for snapshot in snapshots {
            let id = snapshot.id.clone();
            match store.upsert(snapshot.clone()) {
                Ok(stored) => {
                    self.write_back(&id, &snapshot, stored);
                    saved += 1;
                }
                Err(e) => error!("Autosave failed for resume {id}: {e}"),
            }
        }
        saved
    }

    /// Reflects a successful persist back into the registry. The live draft
    /// is replaced only while it still matches the persisted snapshot; an
    /// edit that landed while the file write was in flight stays in place
    /// and reaches the store on the next save or sweep.
    fn write_back(&self, id: &str, snapshot: &Resume, stored: Resume) {
        let mut open = self.open.write().expect("sessions lock poisoned");
        if let Some(live) = open.get_mut(id) {
            if live == snapshot {
                *live = stored;
            }
        }
    }

    /// Drops the draft without persisting it.
    pub fn close(&self, id: &str) {
        self.open.write().expect("sessions lock poisoned").remove(id);
    }
}

/// Spawns the periodic autosave task. Runs for the lifetime of the process.
pub fn spawn_autosave(store: ResumeStore, sessions: EditorSessions) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(AUTOSAVE_INTERVAL);
        // The first tick fires immediately; skip it so saves start one full
        // interval after startup.
        interval.tick().await;
        info!(
            "Autosave task started (every {}s)",
            AUTOSAVE_INTERVAL.as_secs()
        );
        loop {
            interval.tick().await;
            let saved = sessions.sweep(&store);
            if saved > 0 {
                debug!("Autosave persisted {saved} draft(s)");
            }
        }
    })
}
