use super::StorageBackend;
use crate::error::{EduError, Result};
use crate::model::EducationEntry;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Inner {
    entries: RefCell<Vec<EducationEntry>>,
    simulate_write_error: RefCell<bool>,
}

/// In-memory backend for testing. Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since eduhist is single-threaded;
/// clones share state (`Rc`) so tests can keep a handle on the backend after
/// handing it to a store.
#[derive(Clone, Default)]
pub struct MemBackend {
    inner: Rc<Inner>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.inner.simulate_write_error.borrow_mut() = simulate;
    }

    /// What the last successful save wrote.
    pub fn saved_entries(&self) -> Vec<EducationEntry> {
        self.inner.entries.borrow().clone()
    }

    /// Seed persisted state before a store opens, for read-at-init tests.
    pub fn seed(&self, entries: Vec<EducationEntry>) {
        *self.inner.entries.borrow_mut() = entries;
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Vec<EducationEntry>> {
        Ok(self.inner.entries.borrow().clone())
    }

    fn save(&self, entries: &[EducationEntry]) -> Result<()> {
        if *self.inner.simulate_write_error.borrow() {
            return Err(EduError::Store("Simulated write error".to_string()));
        }
        *self.inner.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{EducationDocument, EntryDraft, NewEntry, StudyForm};

    pub fn draft(institution: &str, specialty: &str) -> EntryDraft {
        EntryDraft {
            institution: institution.to_string(),
            specialty: specialty.to_string(),
            start_year: Some(2015),
            end_year: Some(2019),
            study_form: Some(StudyForm::FullTime),
            documents: Vec::new(),
        }
    }

    pub fn new_entry(institution: &str) -> NewEntry {
        NewEntry {
            institution: institution.to_string(),
            specialty: "Physics".to_string(),
            start_year: 2015,
            end_year: Some(2019),
            study_form: StudyForm::FullTime,
            documents: Vec::new(),
        }
    }

    pub fn document(name: &str) -> EducationDocument {
        EducationDocument {
            name: name.to_string(),
            mime_type: "text/plain".to_string(),
            data_url: "data:text/plain;base64,aGk=".to_string(),
        }
    }
}
