//! # Task Ledger
//!
//! A record store for short text tasks. Each task has one owner who may
//! complete or delete it, and no two tasks may ever share the same content.
//!
//! ## Uniqueness Without an Index
//!
//! Every task claims a guard record whose address is derived from its
//! content (first 16 bytes of SHA-256). Claiming is an insert-if-absent into
//! the key-value store, so "check then insert" is a single atomic step and
//! duplicate detection is an address collision.
//!
//! ```text
//! create(owner, handle, content)
//!     │
//!     ├─ validate length (5..=500 chars)
//!     ├─ key = sha256(content)[..16]
//!     └─ atomic batch ─┬─ Create  g:{key}    -> UniquenessGuard
//!                      └─ Create  t:{handle} -> TaskRecord
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Guard Precedes Task | Every task has a guard for its content, written in the same batch |
//! | 2 | Use Once | A content key is claimed at most once, ever; guards are never deleted |
//! | 3 | Immutable Owner | Only `completed` and existence change after creation |
//! | 4 | Owner Gated | Only the owner may complete or delete |
//! | 5 | Strict Completion | Completing a completed task is an error, not a no-op |
//! | 6 | Atomic Operations | A failed operation writes nothing |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (entities, key derivation, validation)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `adapters/` - Key-value stores, serializer, time sources
//! - `service/` - Application service implementing the API
//!
//! ## Usage
//!
//! ```
//! use task_ledger::{
//!     BincodeRecordSerializer, InMemoryKVStore, LedgerConfig, SystemTimeSource,
//!     TaskHandle, TaskLedgerApi, TaskLedgerDependencies, TaskLedgerService,
//! };
//!
//! let deps = TaskLedgerDependencies {
//!     kv_store: InMemoryKVStore::new(),
//!     time_source: SystemTimeSource,
//!     serializer: BincodeRecordSerializer,
//! };
//! let mut ledger = TaskLedgerService::new(deps, LedgerConfig::default()).unwrap();
//!
//! let owner = [1u8; 32];
//! let handle = ledger
//!     .create_task(owner, TaskHandle::generate(), "Start the project")
//!     .unwrap();
//! ledger.complete_task(handle, owner, true).unwrap();
//! assert!(ledger.get_task(handle).unwrap().completed);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{
    BincodeRecordSerializer, FileBackedKVStore, FixedTimeSource, InMemoryKVStore,
    SystemTimeSource,
};
pub use domain::content_key::{ContentKey, CONTENT_KEY_LEN};
pub use domain::entities::{ClaimOutcome, TaskHandle, TaskRecord, UniquenessGuard};
pub use domain::errors::{ErrorKind, KVStoreError, SerializationError, TaskError};
pub use domain::value_objects::{
    ContentBounds, KeyPrefix, LedgerConfig, MAX_CONTENT_CHARS, MIN_CONTENT_CHARS,
};
pub use ports::inbound::{GuardStore, TaskLedgerApi};
pub use ports::outbound::{BatchOperation, KeyValueStore, RecordSerializer, TimeSource};
pub use service::{SharedTaskLedger, TaskLedgerDependencies, TaskLedgerService};
