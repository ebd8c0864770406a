//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the ledger service.
//!
//! The storage substrate is expected to provide atomic, durable, key-addressed
//! writes. Uniqueness comes from `BatchOperation::Create`: an insert that
//! fails when the key is occupied, checked and applied in one step.

use crate::domain::entities::{TaskRecord, UniquenessGuard};
use crate::domain::errors::{KVStoreError, SerializationError};
use shared_types::Timestamp;

/// Result of a prefix scan: (key, value) pairs in store iteration order.
pub type ScanResult = Vec<(Vec<u8>, Vec<u8>)>;

/// Abstract interface for key-value database operations.
///
/// Production: `FileBackedKVStore`
/// Testing: `InMemoryKVStore`
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError>;

    /// Iterate over keys with a prefix.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError>;

    /// Execute an atomic batch write.
    ///
    /// ## Atomicity Guarantee
    ///
    /// Every conditional operation is checked before anything is written.
    /// Either ALL operations in the batch are applied, or NONE are, and the
    /// first failing precondition is returned.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError>;
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    /// Insert a key that must not exist yet.
    Create { key: Vec<u8>, value: Vec<u8> },
    /// Put a key-value pair unconditionally.
    Put { key: Vec<u8>, value: Vec<u8> },
    /// Replace a value only if it still equals `expected`.
    CompareAndSwap {
        key: Vec<u8>,
        expected: Vec<u8>,
        value: Vec<u8>,
    },
    /// Remove a key only if its value still equals `expected`.
    DeleteIfMatch { key: Vec<u8>, expected: Vec<u8> },
    /// Delete a key unconditionally.
    Delete { key: Vec<u8> },
}

impl BatchOperation {
    /// Create an insert-if-absent operation.
    pub fn create(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Create {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a compare-and-swap operation.
    pub fn compare_and_swap(
        key: impl Into<Vec<u8>>,
        expected: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        BatchOperation::CompareAndSwap {
            key: key.into(),
            expected: expected.into(),
            value: value.into(),
        }
    }

    /// Create a conditional delete.
    pub fn delete_if_match(key: impl Into<Vec<u8>>, expected: impl Into<Vec<u8>>) -> Self {
        BatchOperation::DeleteIfMatch {
            key: key.into(),
            expected: expected.into(),
        }
    }

    /// Create a Delete operation.
    pub fn delete(key: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Delete { key: key.into() }
    }

    /// The key this operation touches.
    pub fn key(&self) -> &[u8] {
        match self {
            BatchOperation::Create { key, .. }
            | BatchOperation::Put { key, .. }
            | BatchOperation::CompareAndSwap { key, .. }
            | BatchOperation::DeleteIfMatch { key, .. }
            | BatchOperation::Delete { key } => key,
        }
    }
}

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Get current timestamp in seconds since epoch.
    fn now(&self) -> Timestamp;
}

/// Abstract interface for record serialization.
pub trait RecordSerializer: Send + Sync {
    fn serialize_task(&self, task: &TaskRecord) -> Result<Vec<u8>, SerializationError>;

    fn deserialize_task(&self, data: &[u8]) -> Result<TaskRecord, SerializationError>;

    fn serialize_guard(&self, guard: &UniquenessGuard) -> Result<Vec<u8>, SerializationError>;

    fn deserialize_guard(&self, data: &[u8]) -> Result<UniquenessGuard, SerializationError>;
}
