//! # Task Ledger API Implementation
//!
//! Create, complete and delete, plus the read paths.

use super::*;
use crate::domain::content_key::ContentKey;
use crate::domain::entities::{TaskHandle, TaskRecord, UniquenessGuard};
use crate::domain::errors::KVStoreError;
use crate::domain::validation::{ensure_completion_allowed, ensure_owner, validate_content};
use crate::domain::value_objects::KeyPrefix;
use crate::ports::inbound::TaskLedgerApi;
use crate::ports::outbound::BatchOperation;
use shared_types::PublicKey;

impl<KV, TS, RS> TaskLedgerApi for TaskLedgerService<KV, TS, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    RS: RecordSerializer,
{
    fn create_task(
        &mut self,
        owner: PublicKey,
        handle: TaskHandle,
        content: &str,
    ) -> Result<TaskHandle, TaskError> {
        if let Err(e) = validate_content(content, &self.config.content_bounds) {
            #[cfg(feature = "tracing-log")]
            tracing::debug!("[task-ledger] create rejected for {}: {}", handle, e);
            return Err(e);
        }

        let key = ContentKey::derive(content);
        let now = self.time_source.now();

        let task = TaskRecord::new(owner, content.to_string(), now);
        let task_data = self.serializer.serialize_task(&task)?;
        let guard_key = KeyPrefix::guard_key(&key);

        // Guard first: when both addresses are taken, the content conflict wins.
        let operations = vec![
            self.guard_claim_op(key, Some(content), now)?,
            BatchOperation::create(KeyPrefix::task_key(&handle), task_data),
        ];

        match self.kv_store.atomic_batch_write(operations) {
            Ok(()) => {
                #[cfg(feature = "tracing-log")]
                tracing::info!(
                    "[task-ledger] ✓ Task {} created by {} (content key {})",
                    handle,
                    shared_types::short_hex(&owner),
                    key
                );
                Ok(handle)
            }
            Err(KVStoreError::KeyExists { key: taken }) if taken == guard_key => {
                #[cfg(feature = "tracing-log")]
                tracing::debug!("[task-ledger] create rejected: content key {} taken", key);
                Err(TaskError::TaskAlreadyExists { key })
            }
            Err(KVStoreError::KeyExists { .. }) => Err(TaskError::HandleInUse { handle }),
            Err(e) => Err(e.into()),
        }
    }

    fn complete_task(
        &mut self,
        handle: TaskHandle,
        caller: PublicKey,
        desired: bool,
    ) -> Result<(), TaskError> {
        let task_key = KeyPrefix::task_key(&handle);

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let (current, mut task) = self.load_task_raw(handle)?;
            ensure_owner(&task, &caller, handle)?;
            ensure_completion_allowed(&task, desired, handle)?;

            task.completed = desired;
            let updated = self.serializer.serialize_task(&task)?;

            let op = BatchOperation::compare_and_swap(task_key.clone(), current, updated);
            match self.kv_store.atomic_batch_write(vec![op]) {
                Ok(()) => {
                    #[cfg(feature = "tracing-log")]
                    tracing::info!("[task-ledger] Task {} completed={}", handle, desired);
                    return Ok(());
                }
                Err(KVStoreError::KeyMissing { .. }) => {
                    return Err(TaskError::RecordNotFound { handle })
                }
                // Changed underneath us; re-read and re-check.
                Err(KVStoreError::ValueMismatch { .. }) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(TaskError::Storage {
            message: format!("task {} kept changing during completion", handle),
        })
    }

    fn delete_task(&mut self, handle: TaskHandle, caller: PublicKey) -> Result<(), TaskError> {
        let task_key = KeyPrefix::task_key(&handle);

        for _ in 0..MAX_WRITE_ATTEMPTS {
            let (current, task) = self.load_task_raw(handle)?;
            ensure_owner(&task, &caller, handle)?;

            // The guard stays: deleted content is never reusable.
            let op = BatchOperation::delete_if_match(task_key.clone(), current);
            match self.kv_store.atomic_batch_write(vec![op]) {
                Ok(()) => {
                    #[cfg(feature = "tracing-log")]
                    tracing::info!("[task-ledger] 🗑 Task {} deleted", handle);
                    return Ok(());
                }
                Err(KVStoreError::KeyMissing { .. }) => {
                    return Err(TaskError::RecordNotFound { handle })
                }
                Err(KVStoreError::ValueMismatch { .. }) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(TaskError::Storage {
            message: format!("task {} kept changing during deletion", handle),
        })
    }

    fn get_task(&self, handle: TaskHandle) -> Result<TaskRecord, TaskError> {
        self.load_task_raw(handle).map(|(_, task)| task)
    }

    fn list_tasks_for_owner(
        &self,
        owner: PublicKey,
    ) -> Result<Vec<(TaskHandle, TaskRecord)>, TaskError> {
        let entries = self.kv_store.prefix_scan(KeyPrefix::Task.as_bytes())?;

        let mut tasks = Vec::new();
        for (key, value) in entries {
            let Some(handle) = KeyPrefix::parse_task_key(&key) else {
                continue; // Skip malformed keys
            };
            let task = self.serializer.deserialize_task(&value)?;
            if task.is_owned_by(&owner) {
                tasks.push((handle, task));
            }
        }
        Ok(tasks)
    }

    fn get_guard(&self, content: &str) -> Result<Option<UniquenessGuard>, TaskError> {
        let key = ContentKey::derive(content);
        match self.kv_store.get(&KeyPrefix::guard_key(&key))? {
            Some(data) => Ok(Some(self.serializer.deserialize_guard(&data)?)),
            None => Ok(None),
        }
    }

    fn is_content_claimed(&self, content: &str) -> Result<bool, TaskError> {
        let key = ContentKey::derive(content);
        Ok(self.kv_store.exists(&KeyPrefix::guard_key(&key))?)
    }
}
