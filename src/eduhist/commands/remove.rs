use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};

/// Remove one entry. Confirmation is a presentation-boundary concern; by the
/// time this runs the deletion has been confirmed.
pub fn run<B: StorageBackend>(store: &mut EntryStore<B>, id: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.remove_entry(id)? {
        result.add_message(CmdMessage::success(format!("Entry removed ({})", id)));
    } else {
        result.add_message(CmdMessage::warning(format!("No entry with id {}", id)));
    }
    Ok(result)
}
