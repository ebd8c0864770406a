//! # Persistence
//!
//! Ledger state across file-backed store reopen.

#[cfg(test)]
mod tests {
    use crate::ledger_over;
    use task_ledger::{
        ErrorKind, FileBackedKVStore, KVStoreError, TaskError, TaskHandle, TaskLedgerApi,
    };

    #[test]
    fn test_guards_and_tasks_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.db");
        let owner = [0x31; 32];

        let (kept, removed) = {
            let mut ledger = ledger_over(FileBackedKVStore::open(&path).unwrap());
            let kept = ledger
                .create_task(owner, TaskHandle::generate(), "Persist me")
                .unwrap();
            let removed = ledger
                .create_task(owner, TaskHandle::generate(), "Delete me")
                .unwrap();
            ledger.complete_task(kept, owner, true).unwrap();
            ledger.delete_task(removed, owner).unwrap();
            (kept, removed)
        };

        let mut ledger = ledger_over(FileBackedKVStore::open(&path).unwrap());
        assert!(ledger.get_task(kept).unwrap().completed);
        assert_eq!(
            ledger.get_task(removed),
            Err(TaskError::RecordNotFound { handle: removed })
        );

        // Retired content is still retired after restart
        assert!(matches!(
            ledger.create_task(owner, TaskHandle::generate(), "Delete me"),
            Err(TaskError::TaskAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_second_handle_cannot_drop_retired_guards() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.db");
        let owner = [0x32; 32];

        {
            let mut ledger = ledger_over(FileBackedKVStore::open(&path).unwrap());
            let h = ledger
                .create_task(owner, TaskHandle::generate(), "Retire me forever")
                .unwrap();
            ledger.delete_task(h, owner).unwrap();

            // A rival handle would flush its stale map over the guard
            assert!(matches!(
                FileBackedKVStore::open(&path),
                Err(KVStoreError::Locked { .. })
            ));

            ledger
                .create_task(owner, TaskHandle::generate(), "Other content")
                .unwrap();
        }

        let mut ledger = ledger_over(FileBackedKVStore::open(&path).unwrap());
        let result = ledger.create_task(owner, TaskHandle::generate(), "Retire me forever");
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Conflict);
        assert!(ledger.is_content_claimed("Other content").unwrap());
    }
}
