//! # Storage Layer
//!
//! The single source of truth for the user's education entries. The
//! [`EntryStore`] owns the ordered in-memory sequence, assigns identities,
//! and persists through an abstract [`StorageBackend`].
//!
//! ## Design Rationale
//!
//! The backend is abstracted behind a trait to:
//! - Enable **testing** with `MemBackend` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Persistence Model
//!
//! The persisted state is one named record holding the full entry sequence:
//!
//! ```text
//! education.json        # { "entries": [ ... ] }
//! ```
//!
//! It is read once when the store opens and overwritten in full after every
//! mutation — no incremental writes. If a write fails, the in-memory state
//! is rolled back so memory and disk never diverge.
//!
//! ## Mutation Semantics
//!
//! - The store never validates; callers run the validator first.
//! - `update_entry` and `remove_entry` on an unknown id are silent no-ops
//!   (`Ok(false)`, logged at warn) rather than errors. `remove_entry` is
//!   therefore idempotent.
//! - Document removal is a derived read-modify-write on top of
//!   `update_entry`, not a storage primitive. Safe under the
//!   single-threaded model; would need to become atomic if concurrent
//!   writers were ever introduced.
//!
//! ## Change Notifications
//!
//! Presentation layers register a [`StoreSubscriber`]; after each successful
//! mutation the store passes them the event and the full current sequence to
//! re-read.

use crate::error::Result;
use crate::model::{EducationEntry, EntryPatch, NewEntry};
use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

pub mod fs;
pub mod memory;

/// Abstract interface for persisted state I/O. Whole-state reads and writes
/// only; the store keeps the working copy in memory.
pub trait StorageBackend {
    /// Load the full persisted sequence. Missing state loads as empty.
    fn load(&self) -> Result<Vec<EducationEntry>>;

    /// Overwrite the full persisted sequence.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, entries: &[EducationEntry]) -> Result<()>;
}

/// What changed, carrying the affected entry id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(i64),
    Updated(i64),
    Removed(i64),
}

/// Observer interface for store mutations.
pub trait StoreSubscriber {
    /// Called after each successful mutation with the full current sequence.
    fn on_change(&self, event: &StoreEvent, entries: &[EducationEntry]);
}

/// The process-wide entry store. Construct once at startup via [`open`];
/// inject into whatever layer needs it.
///
/// [`open`]: EntryStore::open
pub struct EntryStore<B: StorageBackend> {
    backend: B,
    entries: Vec<EducationEntry>,
    last_id: i64,
    subscribers: Vec<Arc<dyn StoreSubscriber>>,
}

impl<B: StorageBackend> EntryStore<B> {
    /// Open the store, reading the persisted sequence once.
    pub fn open(backend: B) -> Result<Self> {
        let entries = backend.load()?;
        let last_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0);
        debug!("store opened with {} entries", entries.len());
        Ok(Self {
            backend,
            entries,
            last_id,
            subscribers: Vec::new(),
        })
    }

    /// The full sequence in display order.
    pub fn entries(&self) -> &[EducationEntry] {
        &self.entries
    }

    pub fn get(&self, id: i64) -> Option<&EducationEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn subscribe(&mut self, subscriber: Arc<dyn StoreSubscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn unsubscribe(&mut self, subscriber: &Arc<dyn StoreSubscriber>) {
        self.subscribers
            .retain(|existing| !Arc::ptr_eq(existing, subscriber));
    }

    // Millisecond timestamps are unique on human timescales; bump past the
    // last issued id when mutations land within the same tick so ids stay
    // strictly increasing within a store instance.
    fn next_id(&mut self) -> i64 {
        let candidate = Utc::now().timestamp_millis();
        self.last_id = if candidate > self.last_id {
            candidate
        } else {
            self.last_id + 1
        };
        self.last_id
    }

    fn notify(&self, event: StoreEvent) {
        for subscriber in &self.subscribers {
            subscriber.on_change(&event, &self.entries);
        }
    }

    /// Assign a fresh id to the validated candidate, append it to the end of
    /// the sequence, persist, and return the stored entry. Does not
    /// validate; callers are required to run the validator first.
    pub fn add_entry(&mut self, new: NewEntry) -> Result<EducationEntry> {
        let entry = new.into_entry(self.next_id());
        self.entries.push(entry.clone());
        if let Err(e) = self.backend.save(&self.entries) {
            self.entries.pop();
            return Err(e);
        }
        debug!("added entry {}", entry.id);
        self.notify(StoreEvent::Added(entry.id));
        Ok(entry)
    }

    /// Merge the patch into the entry matching `id`, leaving unset fields
    /// untouched. Returns `Ok(false)` without persisting when the id is
    /// unknown.
    pub fn update_entry(&mut self, id: i64, patch: EntryPatch) -> Result<bool> {
        let Some(pos) = self.entries.iter().position(|entry| entry.id == id) else {
            warn!("update_entry: no entry with id {}", id);
            return Ok(false);
        };
        let previous = self.entries[pos].clone();
        patch.apply(&mut self.entries[pos]);
        if let Err(e) = self.backend.save(&self.entries) {
            self.entries[pos] = previous;
            return Err(e);
        }
        debug!("updated entry {}", id);
        self.notify(StoreEvent::Updated(id));
        Ok(true)
    }

    /// Remove the entry matching `id`. Idempotent: removing an unknown id is
    /// an `Ok(false)` no-op.
    pub fn remove_entry(&mut self, id: i64) -> Result<bool> {
        let Some(pos) = self.entries.iter().position(|entry| entry.id == id) else {
            warn!("remove_entry: no entry with id {}", id);
            return Ok(false);
        };
        let removed = self.entries.remove(pos);
        if let Err(e) = self.backend.save(&self.entries) {
            self.entries.insert(pos, removed);
            return Err(e);
        }
        debug!("removed entry {}", id);
        self.notify(StoreEvent::Removed(id));
        Ok(true)
    }

    /// Remove the document at `index` from the entry matching `id`. Derived
    /// operation: reads the current document sequence, drops the index, and
    /// writes it back through [`update_entry`](EntryStore::update_entry).
    /// `Ok(false)` when the entry is unknown or the index is out of range;
    /// nothing is persisted in that case.
    pub fn remove_document(&mut self, id: i64, index: usize) -> Result<bool> {
        let Some(entry) = self.get(id) else {
            warn!("remove_document: no entry with id {}", id);
            return Ok(false);
        };
        if index >= entry.documents.len() {
            warn!(
                "remove_document: entry {} has no document at index {}",
                id, index
            );
            return Ok(false);
        }
        let mut documents = entry.documents.clone();
        documents.remove(index);
        self.update_entry(
            id,
            EntryPatch {
                documents: Some(documents),
                ..EntryPatch::default()
            },
        )
    }
}
