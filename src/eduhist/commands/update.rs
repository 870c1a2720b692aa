use crate::commands::{CmdMessage, CmdResult};
use crate::encoder;
use crate::error::{EduError, Result};
use crate::model::{EntryDraft, EntryPatch};
use crate::store::{EntryStore, StorageBackend};
use crate::validation;
use std::path::PathBuf;

/// The edit path. The patch is merged into the existing entry, the merged
/// candidate is re-validated as a whole, and any new attachments are
/// appended after the documents the entry already has. An unknown id yields
/// a warning message, not an error.
pub fn run<B: StorageBackend>(
    store: &mut EntryStore<B>,
    id: i64,
    patch: EntryPatch,
    attachments: &[PathBuf],
) -> Result<CmdResult> {
    let Some(existing) = store.get(id) else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!("No entry with id {}", id)));
        return Ok(result);
    };

    let mut merged = existing.clone();
    patch.apply(&mut merged);

    let draft = EntryDraft::from_entry(&merged);
    let mut new_entry = validation::validate(&draft).map_err(EduError::Validation)?;
    new_entry.documents.extend(encoder::encode_batch(attachments)?);

    store.update_entry(id, EntryPatch::from(new_entry))?;

    let mut result = CmdResult::default();
    if let Some(updated) = store.get(id) {
        result.add_message(CmdMessage::success(format!(
            "Entry updated ({}): {}",
            id, updated.institution
        )));
        result.affected_entries.push(updated.clone());
    }
    Ok(result)
}
