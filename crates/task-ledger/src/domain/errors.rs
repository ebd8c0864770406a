//! # Domain Errors
//!
//! Error types for the Task Ledger.
//!
//! ## Design Principles
//!
//! - Each error maps to a specific invariant violation or failure mode
//! - Every error carries an [`ErrorKind`] so callers branch on structure, not text
//! - No panics in domain logic (use Result instead)

use crate::domain::content_key::ContentKey;
use crate::domain::entities::TaskHandle;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`TaskError`].
///
/// Callers (UIs, RPC layers) map these to user-facing messages and decide
/// whether resubmitting makes sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Content length out of bounds. Resubmit with corrected content.
    Validation,
    /// Content or record address already taken. Only different input helps.
    Conflict,
    /// Caller is not the record owner. Retrying will not help.
    Authorization,
    /// Record state does not allow the transition. Caller view is stale.
    Precondition,
    /// Record absent.
    NotFound,
    /// Persistence or encoding failure below the domain.
    Storage,
}

/// Errors returned by ledger operations.
///
/// A returned error always means the operation's effect set was not committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("The task description is too short: {length} chars, min {min}")]
    DescriptionTooShort { length: usize, min: usize },

    #[error("The task description is too long: {length} chars, max {max}")]
    DescriptionTooLong { length: usize, max: usize },

    #[error("The task already exists (content key {key})")]
    TaskAlreadyExists { key: ContentKey },

    #[error("Record address already in use: {handle}")]
    HandleInUse { handle: TaskHandle },

    #[error("Caller is not the owner of task {handle}")]
    Unauthorized { handle: TaskHandle },

    #[error("The task is already marked as completed: {handle}")]
    TaskAlreadyCompleted { handle: TaskHandle },

    #[error("Task not found: {handle}")]
    RecordNotFound { handle: TaskHandle },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl TaskError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::DescriptionTooShort { .. } | TaskError::DescriptionTooLong { .. } => {
                ErrorKind::Validation
            }
            TaskError::TaskAlreadyExists { .. } | TaskError::HandleInUse { .. } => {
                ErrorKind::Conflict
            }
            TaskError::Unauthorized { .. } => ErrorKind::Authorization,
            TaskError::TaskAlreadyCompleted { .. } => ErrorKind::Precondition,
            TaskError::RecordNotFound { .. } => ErrorKind::NotFound,
            TaskError::Storage { .. }
            | TaskError::Serialization { .. }
            | TaskError::InvalidConfig { .. } => ErrorKind::Storage,
        }
    }
}

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// A `Create` targeted an occupied key.
    #[error("Key already exists: {}", hex::encode(key))]
    KeyExists { key: Vec<u8> },

    /// A conditional write targeted an absent key.
    #[error("Key missing: {}", hex::encode(key))]
    KeyMissing { key: Vec<u8> },

    /// A conditional write found different bytes than expected.
    #[error("Value mismatch at key {}", hex::encode(key))]
    ValueMismatch { key: Vec<u8> },

    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },

    #[error("KV store lock poisoned")]
    LockPoisoned,

    /// Another handle already holds the store file.
    #[error("KV store already in use: {}", path.display())]
    Locked { path: PathBuf },
}

impl From<KVStoreError> for TaskError {
    fn from(err: KVStoreError) -> Self {
        TaskError::Storage {
            message: err.to_string(),
        }
    }
}

/// Serialization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Serialization error: {message}")]
pub struct SerializationError {
    pub message: String,
}

impl From<SerializationError> for TaskError {
    fn from(err: SerializationError) -> Self {
        TaskError::Serialization {
            message: err.message,
        }
    }
}
