//! # API Facade
//!
//! The single entry point for all eduhist operations, regardless of the UI
//! in front of it. A **thin facade**: it dispatches to the command layer and
//! manages change subscriptions, nothing more — no business logic, no I/O,
//! no presentation concerns.
//!
//! `EduApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `EduApi<FsBackend>`
//! - Testing: `EduApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{EducationEntry, EntryDraft, EntryPatch};
use crate::store::{EntryStore, StorageBackend, StoreSubscriber};
use std::path::PathBuf;
use std::sync::Arc;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for eduhist operations.
pub struct EduApi<B: StorageBackend> {
    store: EntryStore<B>,
}

impl<B: StorageBackend> EduApi<B> {
    /// Open the store on the given backend, reading persisted state once.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            store: EntryStore::open(backend)?,
        })
    }

    /// Validate a candidate, encode its attachments, and add the entry.
    pub fn submit_entry(
        &mut self,
        draft: EntryDraft,
        attachments: &[PathBuf],
    ) -> Result<CmdResult> {
        commands::submit::run(&mut self.store, draft, attachments)
    }

    pub fn list_entries(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Merge a patch into an existing entry, re-validating the result.
    pub fn update_entry(
        &mut self,
        id: i64,
        patch: EntryPatch,
        attachments: &[PathBuf],
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch, attachments)
    }

    pub fn remove_entry(&mut self, id: i64) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn remove_document(&mut self, id: i64, index: usize) -> Result<CmdResult> {
        commands::documents::remove(&mut self.store, id, index)
    }

    /// Direct read access for presentation layers.
    pub fn entries(&self) -> &[EducationEntry] {
        self.store.entries()
    }

    pub fn get_entry(&self, id: i64) -> Option<&EducationEntry> {
        self.store.get(id)
    }

    pub fn subscribe(&mut self, subscriber: Arc<dyn StoreSubscriber>) {
        self.store.subscribe(subscriber);
    }

    pub fn unsubscribe(&mut self, subscriber: &Arc<dyn StoreSubscriber>) {
        self.store.unsubscribe(subscriber);
    }
}
