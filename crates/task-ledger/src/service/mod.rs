//! # Task Ledger Service
//!
//! The operation orchestrator.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `TaskLedgerApi` (create / complete / delete / reads)
//! 2. Implements `GuardStore` for direct guard claims
//! 3. Turns every operation into a single `atomic_batch_write`
//! 4. Uses dependency injection for all external dependencies

mod guard;
mod helpers;
mod operations;
mod shared;

pub use shared::SharedTaskLedger;

use crate::domain::errors::TaskError;
use crate::domain::value_objects::LedgerConfig;
use crate::ports::outbound::{KeyValueStore, RecordSerializer, TimeSource};

/// Attempts for a conditional write before giving up on contention.
const MAX_WRITE_ATTEMPTS: usize = 3;

/// The Task Ledger Service.
pub struct TaskLedgerService<KV, TS, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    RS: RecordSerializer,
{
    /// Key-value store holding task records and guards.
    pub(crate) kv_store: KV,
    /// Time source for creation and claim timestamps.
    pub(crate) time_source: TS,
    /// Record serializer.
    pub(crate) serializer: RS,
    /// Service configuration.
    pub(crate) config: LedgerConfig,
}

/// Dependencies for TaskLedgerService
pub struct TaskLedgerDependencies<KV, TS, RS> {
    pub kv_store: KV,
    pub time_source: TS,
    pub serializer: RS,
}

impl<KV, TS, RS> TaskLedgerService<KV, TS, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    RS: RecordSerializer,
{
    /// Create a new service over the given dependencies.
    ///
    /// Fails if `config` does not validate.
    pub fn new(
        deps: TaskLedgerDependencies<KV, TS, RS>,
        config: LedgerConfig,
    ) -> Result<Self, TaskError> {
        config.validate()?;
        Ok(Self {
            kv_store: deps.kv_store,
            time_source: deps.time_source,
            serializer: deps.serializer,
            config,
        })
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Consume the service, returning its store.
    pub fn into_store(self) -> KV {
        self.kv_store
    }
}
