//! # Integration Test Flows
//!
//! Full task lifecycles through `TaskLedgerApi`.

#[cfg(test)]
mod tests {
    use crate::{init_test_tracing, memory_ledger};
    use shared_types::PublicKey;
    use task_ledger::{
        ClaimOutcome, ContentKey, ErrorKind, GuardStore, TaskError, TaskHandle, TaskLedgerApi,
    };

    const OWNER: PublicKey = [0x11; 32];
    const STRANGER: PublicKey = [0x22; 32];

    #[test]
    fn test_full_lifecycle() {
        init_test_tracing();
        let mut ledger = memory_ledger();

        let handle = ledger
            .create_task(OWNER, TaskHandle::generate(), "Start the project")
            .unwrap();
        assert!(!ledger.get_task(handle).unwrap().completed);

        ledger.complete_task(handle, OWNER, true).unwrap();
        assert!(ledger.get_task(handle).unwrap().completed);

        let again = ledger.complete_task(handle, OWNER, true).unwrap_err();
        assert_eq!(again.kind(), ErrorKind::Precondition);

        ledger.delete_task(handle, OWNER).unwrap();

        let fetched = ledger.get_task(handle).unwrap_err();
        assert_eq!(fetched, TaskError::RecordNotFound { handle });
        assert_eq!(fetched.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_length_rejections() {
        let mut ledger = memory_ledger();

        let too_long = "a".repeat(501);
        let err = ledger
            .create_task(OWNER, TaskHandle::generate(), &too_long)
            .unwrap_err();
        assert!(matches!(err, TaskError::DescriptionTooLong { .. }));
        assert_eq!(err.kind(), ErrorKind::Validation);

        let too_short = "a".repeat(4);
        let err = ledger
            .create_task(OWNER, TaskHandle::generate(), &too_short)
            .unwrap_err();
        assert!(matches!(err, TaskError::DescriptionTooShort { .. }));

        assert!(!ledger.is_content_claimed(&too_long).unwrap());
        assert!(!ledger.is_content_claimed(&too_short).unwrap());
    }

    #[test]
    fn test_stranger_cannot_touch_task() {
        let mut ledger = memory_ledger();
        let handle = ledger
            .create_task(OWNER, TaskHandle::generate(), "Owner's errand")
            .unwrap();

        let err = ledger.complete_task(handle, STRANGER, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Authorization);
        let err = ledger.delete_task(handle, STRANGER).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Authorization);

        let task = ledger.get_task(handle).unwrap();
        assert!(!task.completed);
        assert_eq!(task.owner, OWNER);
    }

    #[test]
    fn test_content_retired_after_delete() {
        let mut ledger = memory_ledger();
        let handle = ledger
            .create_task(OWNER, TaskHandle::generate(), "Only once")
            .unwrap();
        ledger.delete_task(handle, OWNER).unwrap();

        let err = ledger
            .create_task(STRANGER, TaskHandle::generate(), "Only once")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(
            ledger.try_claim(ContentKey::derive("Only once")).unwrap(),
            ClaimOutcome::AlreadyClaimed
        );
    }

    #[test]
    fn test_owner_listing_tracks_lifecycle() {
        let mut ledger = memory_ledger();
        let a = ledger
            .create_task(OWNER, TaskHandle::generate(), "Water plants")
            .unwrap();
        let b = ledger
            .create_task(OWNER, TaskHandle::generate(), "Feed the cat")
            .unwrap();
        ledger
            .create_task(STRANGER, TaskHandle::generate(), "Not yours")
            .unwrap();

        ledger.complete_task(a, OWNER, true).unwrap();
        ledger.delete_task(b, OWNER).unwrap();

        let listed = ledger.list_tasks_for_owner(OWNER).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, a);
        assert!(listed[0].1.completed);
    }
}
