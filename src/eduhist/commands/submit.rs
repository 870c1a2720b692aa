use crate::commands::{CmdMessage, CmdResult};
use crate::encoder;
use crate::error::{EduError, Result};
use crate::model::EntryDraft;
use crate::store::{EntryStore, StorageBackend};
use crate::validation;
use std::path::PathBuf;

/// The add path. Validate first, then encode every attachment; the store is
/// only touched once both have succeeded, so any failure leaves it exactly
/// as it was.
pub fn run<B: StorageBackend>(
    store: &mut EntryStore<B>,
    draft: EntryDraft,
    attachments: &[PathBuf],
) -> Result<CmdResult> {
    let mut new_entry = validation::validate(&draft).map_err(EduError::Validation)?;
    new_entry.documents.extend(encoder::encode_batch(attachments)?);

    let entry = store.add_entry(new_entry)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry added ({}): {}",
        entry.id, entry.institution
    )));
    result.affected_entries.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, MemBackend};
    use crate::validation::Field;
    use std::fs;
    use tempfile::TempDir;

    fn open_store() -> EntryStore<MemBackend> {
        EntryStore::open(MemBackend::new()).unwrap()
    }

    #[test]
    fn stores_valid_entry_with_fresh_id() {
        let mut store = open_store();
        let result = run(&mut store, fixtures::draft("MIT", "Physics"), &[]).unwrap();

        assert_eq!(result.affected_entries.len(), 1);
        let entry = &result.affected_entries[0];
        assert!(entry.id > 0);
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].institution, "MIT");
    }

    #[test]
    fn rejection_leaves_store_unchanged() {
        let mut store = open_store();
        let err = run(&mut store, fixtures::draft("MIT", "Physics!!"), &[]).unwrap_err();

        match err {
            EduError::Validation(errors) => {
                assert!(errors.get(Field::Specialty).is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(store.entries().is_empty());
    }

    #[test]
    fn encodes_attachments_into_documents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("diploma.pdf");
        fs::write(&path, b"%PDF-1.4").unwrap();

        let mut store = open_store();
        run(&mut store, fixtures::draft("MIT", "Physics"), &[path]).unwrap();

        let documents = &store.entries()[0].documents;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].name, "diploma.pdf");
        assert_eq!(documents[0].mime_type, "application/pdf");
    }

    #[test]
    fn unreadable_attachment_aborts_the_whole_submission() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, b"fine").unwrap();
        let missing = dir.path().join("missing.txt");

        let mut store = open_store();
        let err = run(
            &mut store,
            fixtures::draft("MIT", "Physics"),
            &[good, missing],
        )
        .unwrap_err();

        assert!(matches!(err, EduError::FileRead { .. }));
        assert!(store.entries().is_empty());
    }
}
