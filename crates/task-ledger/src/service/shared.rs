//! # Shared Ledger Handle
//!
//! Cloneable handle for concurrent callers. Each operation takes the lock
//! once, so operations are serialized and none observes another half-done.

use super::*;
use crate::domain::content_key::ContentKey;
use crate::domain::entities::{ClaimOutcome, TaskHandle, TaskRecord, UniquenessGuard};
use crate::ports::inbound::{GuardStore, TaskLedgerApi};
use parking_lot::RwLock;
use shared_types::PublicKey;
use std::sync::Arc;

/// Thread-safe wrapper around a [`TaskLedgerService`].
pub struct SharedTaskLedger<KV, TS, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    RS: RecordSerializer,
{
    inner: Arc<RwLock<TaskLedgerService<KV, TS, RS>>>,
}

impl<KV, TS, RS> Clone for SharedTaskLedger<KV, TS, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    RS: RecordSerializer,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<KV, TS, RS> SharedTaskLedger<KV, TS, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    RS: RecordSerializer,
{
    pub fn new(service: TaskLedgerService<KV, TS, RS>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(service)),
        }
    }

    pub fn create_task(
        &self,
        owner: PublicKey,
        handle: TaskHandle,
        content: &str,
    ) -> Result<TaskHandle, TaskError> {
        self.inner.write().create_task(owner, handle, content)
    }

    pub fn complete_task(
        &self,
        handle: TaskHandle,
        caller: PublicKey,
        desired: bool,
    ) -> Result<(), TaskError> {
        self.inner.write().complete_task(handle, caller, desired)
    }

    pub fn delete_task(&self, handle: TaskHandle, caller: PublicKey) -> Result<(), TaskError> {
        self.inner.write().delete_task(handle, caller)
    }

    pub fn try_claim(&self, key: ContentKey) -> Result<ClaimOutcome, TaskError> {
        self.inner.write().try_claim(key)
    }

    pub fn get_task(&self, handle: TaskHandle) -> Result<TaskRecord, TaskError> {
        self.inner.read().get_task(handle)
    }

    pub fn list_tasks_for_owner(
        &self,
        owner: PublicKey,
    ) -> Result<Vec<(TaskHandle, TaskRecord)>, TaskError> {
        self.inner.read().list_tasks_for_owner(owner)
    }

    pub fn get_guard(&self, content: &str) -> Result<Option<UniquenessGuard>, TaskError> {
        self.inner.read().get_guard(content)
    }

    pub fn is_content_claimed(&self, content: &str) -> Result<bool, TaskError> {
        self.inner.read().is_content_claimed(content)
    }
}
