//! Event store - core pagination engine
//!
//! Owns the canonical date-sorted event collection, applies validation,
//! computes pagination windows, and persists the collection wholesale to a
//! single JSONL snapshot file on every mutation.

mod crud;
mod query;

pub use query::{clamp_limit, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::error::StoreResult;
use crate::seed;
use crate::types::{EventDraft, TimelineEvent, Window, WindowQuery};
use crate::utils::atomic::atomic_write;

/// Event store with an in-memory sorted collection and a snapshot file
pub struct EventStore {
    pub(crate) snapshot_path: PathBuf,
    pub(crate) events: RwLock<Vec<TimelineEvent>>,
    /// Next id to mint; seeded at max(existing) + 1 on load
    next_id: AtomicU64,
}

impl EventStore {
    /// Open a store at the path from `TIMELINE_DATA_FILE` (default
    /// `timeline.jsonl` in the working directory), bootstrapping the
    /// built-in seed when the snapshot is absent or empty
    pub fn open() -> StoreResult<Self> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let default_path = current_dir.join("timeline.jsonl");

        let snapshot_path = match env::var("TIMELINE_DATA_FILE") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    PathBuf::from(path)
                } else {
                    current_dir.join(path)
                }
            }
            Err(_) => default_path,
        };

        Self::open_with_seed(snapshot_path, seed::default_events())
    }

    /// Open a store at an explicit snapshot path with the built-in seed
    pub fn open_at(snapshot_path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open_with_seed(snapshot_path, seed::default_events())
    }

    /// Open a store with a custom seed dataset
    ///
    /// The seed is used only when the snapshot file is absent or empty; it
    /// is sorted, assigned the snapshot's id space, and persisted
    /// immediately, so the store is never empty after initialization unless
    /// the seed itself is empty.
    pub fn open_with_seed(
        snapshot_path: impl Into<PathBuf>,
        seed: Vec<TimelineEvent>,
    ) -> StoreResult<Self> {
        let snapshot_path = snapshot_path.into();

        let (mut events, bootstrapped) = match Self::load_snapshot(&snapshot_path)? {
            Some(events) => (events, false),
            None => {
                info!(
                    path = %snapshot_path.display(),
                    seeded = seed.len(),
                    "snapshot absent or empty, bootstrapping from seed"
                );
                (seed, true)
            }
        };

        events.sort_by(|a, b| a.date.cmp(&b.date));
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;

        let store = Self {
            snapshot_path,
            events: RwLock::new(events),
            next_id: AtomicU64::new(next_id),
        };

        if bootstrapped {
            let events = store.events.read();
            store.persist(&events)?;
        }

        Ok(store)
    }

    /// Load the snapshot file; `None` means absent or empty (bootstrap case)
    fn load_snapshot(path: &Path) -> StoreResult<Option<Vec<TimelineEvent>>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let mut events = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<TimelineEvent>(line) {
                Ok(event) => events.push(event),
                Err(e) => {
                    warn!(line = line_num + 1, error = %e, "skipping unparseable snapshot line");
                }
            }
        }

        if events.is_empty() {
            return Ok(None);
        }
        Ok(Some(events))
    }

    /// Rewrite the snapshot file wholesale (expects caller to hold the lock)
    pub(crate) fn persist(&self, events: &[TimelineEvent]) -> StoreResult<()> {
        let mut content = String::new();
        for event in events {
            content.push_str(&serde_json::to_string(event)?);
            content.push('\n');
        }
        atomic_write(&self.snapshot_path, &content)?;
        Ok(())
    }

    /// Mint a fresh unique event id
    pub(crate) fn mint_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Clone of the full sorted collection
    pub fn snapshot(&self) -> Vec<TimelineEvent> {
        self.events.read().clone()
    }

    /// Number of events in the collection
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Path of the snapshot file
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }
}

// Operations, implemented in submodules
impl EventStore {
    /// Compute a pagination window (from query.rs)
    pub fn window(&self, request: WindowQuery, limit: usize) -> StoreResult<Window> {
        query::window(self, request, limit)
    }

    /// Case-insensitive substring search over title and description
    pub fn search(&self, text: &str, limit: usize) -> StoreResult<Vec<TimelineEvent>> {
        query::search(self, text, limit)
    }

    /// Validate, mint an id, insert, re-sort, persist (from crud.rs)
    pub fn create(&self, draft: &EventDraft) -> StoreResult<TimelineEvent> {
        crud::create(self, draft)
    }

    /// Replace an existing event's fields wholesale, re-sort, persist
    pub fn update(&self, id: u64, draft: &EventDraft) -> StoreResult<TimelineEvent> {
        crud::update(self, id, draft)
    }

    /// Remove an event, persist, return it for caller confirmation
    pub fn delete(&self, id: u64) -> StoreResult<TimelineEvent> {
        crud::delete(self, id)
    }
}
