use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};

/// Remove one attached document by its position in the entry's document
/// list.
pub fn remove<B: StorageBackend>(
    store: &mut EntryStore<B>,
    id: i64,
    index: usize,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.remove_document(id, index)? {
        result.add_message(CmdMessage::success(format!(
            "Document {} removed from entry {}",
            index, id
        )));
        if let Some(entry) = store.get(id) {
            result.affected_entries.push(entry.clone());
        }
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Entry {} has no document at index {}",
            id, index
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::{fixtures, MemBackend};

    fn store_with_documents() -> (EntryStore<MemBackend>, i64) {
        let mut store = EntryStore::open(MemBackend::new()).unwrap();
        let mut candidate = fixtures::new_entry("MIT");
        candidate.documents = vec![fixtures::document("a.pdf"), fixtures::document("b.pdf")];
        let entry = store.add_entry(candidate).unwrap();
        (store, entry.id)
    }

    #[test]
    fn removes_document_at_index() {
        let (mut store, id) = store_with_documents();
        let result = remove(&mut store, id, 0).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        let documents = &store.get(id).unwrap().documents;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].name, "b.pdf");
    }

    #[test]
    fn out_of_range_index_warns() {
        let (mut store, id) = store_with_documents();
        let result = remove(&mut store, id, 7).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.get(id).unwrap().documents.len(), 2);
    }
}
