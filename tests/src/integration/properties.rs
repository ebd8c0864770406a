//! # Property Tests
//!
//! Ledger invariants under arbitrary content and owners.

#[cfg(test)]
mod tests {
    use crate::memory_ledger;
    use proptest::prelude::*;
    use task_ledger::{ContentKey, ErrorKind, TaskHandle, TaskLedgerApi};

    fn arb_owner() -> impl Strategy<Value = [u8; 32]> {
        any::<[u8; 32]>()
    }

    proptest! {
        /// Valid content is accepted once; every later create, by anyone, conflicts.
        #[test]
        fn valid_content_created_exactly_once(
            content in "\\PC{5,120}",
            first in arb_owner(),
            second in arb_owner(),
        ) {
            let mut ledger = memory_ledger();
            prop_assert!(ledger.create_task(first, TaskHandle::generate(), &content).is_ok());

            let err = ledger
                .create_task(second, TaskHandle::generate(), &content)
                .unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Conflict);
        }

        /// Out-of-range content is rejected and leaves its guard address empty.
        #[test]
        fn out_of_range_content_claims_nothing(
            content in prop_oneof!["\\PC{0,4}", "\\PC{501,600}"],
            owner in arb_owner(),
        ) {
            let mut ledger = memory_ledger();
            let err = ledger
                .create_task(owner, TaskHandle::generate(), &content)
                .unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Validation);
            prop_assert!(!ledger.is_content_claimed(&content).unwrap());
        }

        /// Non-owners never change a record.
        #[test]
        fn non_owner_cannot_mutate(owner in arb_owner(), caller in arb_owner()) {
            prop_assume!(owner != caller);
            let mut ledger = memory_ledger();
            let handle = ledger
                .create_task(owner, TaskHandle::generate(), "Guarded task")
                .unwrap();

            let err = ledger.complete_task(handle, caller, true).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Authorization);
            let err = ledger.delete_task(handle, caller).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Authorization);
            prop_assert!(!ledger.get_task(handle).unwrap().completed);
        }

        /// Key derivation is a pure function of content.
        #[test]
        fn content_key_deterministic(content in ".*") {
            prop_assert_eq!(ContentKey::derive(&content), ContentKey::derive(&content));
        }
    }
}
