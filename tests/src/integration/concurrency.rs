//! # Concurrency
//!
//! Callers racing on one `SharedTaskLedger`.

#[cfg(test)]
mod tests {
    use crate::memory_ledger;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use task_ledger::{SharedTaskLedger, TaskError, TaskHandle};

    const RACERS: usize = 8;

    #[test]
    fn test_exactly_one_creator_wins() {
        let ledger = SharedTaskLedger::new(memory_ledger());
        let barrier = Arc::new(Barrier::new(RACERS));

        let workers: Vec<_> = (0..RACERS)
            .map(|i| {
                let ledger = ledger.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let owner = [i as u8; 32];
                    barrier.wait();
                    ledger.create_task(owner, TaskHandle::generate(), "Contested content")
                })
            })
            .collect();

        let results: Vec<_> = workers
            .into_iter()
            .map(|w| w.join().expect("worker panicked"))
            .collect();

        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, TaskError::TaskAlreadyExists { .. })));

        // Only the winner's record exists
        let total: usize = (0..RACERS)
            .map(|i| ledger.list_tasks_for_owner([i as u8; 32]).unwrap().len())
            .sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_exactly_one_completion_wins() {
        let ledger = SharedTaskLedger::new(memory_ledger());
        let owner = [0x42; 32];
        let handle = ledger
            .create_task(owner, TaskHandle::generate(), "Finish line")
            .unwrap();
        let barrier = Arc::new(Barrier::new(RACERS));

        let workers: Vec<_> = (0..RACERS)
            .map(|_| {
                let ledger = ledger.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    ledger.complete_task(handle, owner, true)
                })
            })
            .collect();

        let results: Vec<_> = workers
            .into_iter()
            .map(|w| w.join().expect("worker panicked"))
            .collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == TaskError::TaskAlreadyCompleted { handle }));
        assert!(ledger.get_task(handle).unwrap().completed);
    }

    #[test]
    fn test_complete_delete_race_never_torn() {
        let ledger = SharedTaskLedger::new(memory_ledger());
        let owner = [0x43; 32];
        let handle = ledger
            .create_task(owner, TaskHandle::generate(), "Complete or vanish")
            .unwrap();
        let barrier = Arc::new(Barrier::new(2));

        let completer = {
            let ledger = ledger.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                ledger.complete_task(handle, owner, true)
            })
        };
        let deleter = {
            let ledger = ledger.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                ledger.delete_task(handle, owner)
            })
        };

        let completed = completer.join().expect("completer panicked");
        let deleted = deleter.join().expect("deleter panicked");

        // Delete always succeeds; completion either ran first or saw the record gone
        assert!(deleted.is_ok());
        match completed {
            Ok(()) => {}
            Err(e) => assert_eq!(e, TaskError::RecordNotFound { handle }),
        }
        assert!(ledger.get_task(handle).is_err());
        assert!(ledger.is_content_claimed("Complete or vanish").unwrap());
    }
}
