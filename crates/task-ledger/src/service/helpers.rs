//! # Task Ledger Service - Helper Methods
//!
//! Record loading and batch construction shared by the operations.

use super::*;
use crate::domain::content_key::ContentKey;
use crate::domain::entities::{TaskHandle, TaskRecord, UniquenessGuard};
use crate::domain::value_objects::KeyPrefix;
use crate::ports::outbound::BatchOperation;
use shared_types::Timestamp;

impl<KV, TS, RS> TaskLedgerService<KV, TS, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    RS: RecordSerializer,
{
    /// Load a task together with its stored bytes.
    ///
    /// The bytes are the `expected` value for a follow-up conditional write.
    pub(crate) fn load_task_raw(
        &self,
        handle: TaskHandle,
    ) -> Result<(Vec<u8>, TaskRecord), TaskError> {
        let data = self
            .kv_store
            .get(&KeyPrefix::task_key(&handle))?
            .ok_or(TaskError::RecordNotFound { handle })?;
        let task = self.serializer.deserialize_task(&data)?;
        Ok((data, task))
    }

    /// Build the guard-claim operation for `key`.
    ///
    /// Always a `Create`: the store rejects it if the guard already exists.
    pub(crate) fn guard_claim_op(
        &self,
        key: ContentKey,
        content: Option<&str>,
        now: Timestamp,
    ) -> Result<BatchOperation, TaskError> {
        let retained = content
            .filter(|_| self.config.retain_guard_content)
            .map(str::to_string);
        let guard = UniquenessGuard::new(key, retained, now);
        let data = self.serializer.serialize_guard(&guard)?;
        Ok(BatchOperation::create(KeyPrefix::guard_key(&key), data))
    }
}
