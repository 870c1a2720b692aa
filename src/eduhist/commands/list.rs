use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{EntryStore, StorageBackend};

/// Read the full sequence in display order.
pub fn run<B: StorageBackend>(store: &EntryStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_entries(store.entries().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::submit;
    use crate::store::memory::{fixtures, MemBackend};

    #[test]
    fn lists_entries_in_insertion_order() {
        let mut store = EntryStore::open(MemBackend::new()).unwrap();
        submit::run(&mut store, fixtures::draft("First", "Physics"), &[]).unwrap();
        submit::run(&mut store, fixtures::draft("Second", "Physics"), &[]).unwrap();

        let result = run(&store).unwrap();
        let institutions: Vec<_> = result
            .listed_entries
            .iter()
            .map(|entry| entry.institution.as_str())
            .collect();
        assert_eq!(institutions, ["First", "Second"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = EntryStore::open(MemBackend::new()).unwrap();
        assert!(run(&store).unwrap().listed_entries.is_empty());
    }
}
