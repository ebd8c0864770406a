//! # Ledger Entities
//!
//! Records held by the ledger.
//!
//! - `TaskRecord` - one to-do item, addressed by a caller-chosen `TaskHandle`
//! - `UniquenessGuard` - proof that a content string has been used, addressed
//!   by its `ContentKey`

use crate::domain::content_key::ContentKey;
use serde::{Deserialize, Serialize};
use shared_types::{short_hex, PublicKey, Timestamp};
use std::fmt;

/// Caller-chosen address of a task record.
///
/// Not derived from content: two handles may never share a slot, but the
/// handle says nothing about what the task contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskHandle([u8; 32]);

impl TaskHandle {
    /// Generate a fresh random handle.
    pub fn generate() -> Self {
        Self(rand::random())
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..", short_hex(&self.0))
    }
}

/// A single to-do item.
///
/// `owner` is fixed at creation. Only `completed` and the record's existence
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Authority allowed to complete or delete this task.
    pub owner: PublicKey,
    /// Task text, 5..=500 chars under the default bounds.
    pub content: String,
    /// Completion flag, `false` at creation.
    pub completed: bool,
    /// Creation time.
    pub created_at: Timestamp,
}

impl TaskRecord {
    pub fn new(owner: PublicKey, content: String, created_at: Timestamp) -> Self {
        Self {
            owner,
            content,
            completed: false,
            created_at,
        }
    }

    pub fn is_owned_by(&self, caller: &PublicKey) -> bool {
        self.owner == *caller
    }

    pub fn content_key(&self) -> ContentKey {
        ContentKey::derive(&self.content)
    }
}

/// Marker that a content string has been claimed.
///
/// Guards are never removed, so a content string can be used once for the
/// lifetime of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniquenessGuard {
    pub key: ContentKey,
    /// Claimed content, kept for audit. `None` when retention is disabled.
    pub content: Option<String>,
    pub claimed_at: Timestamp,
}

impl UniquenessGuard {
    pub fn new(key: ContentKey, content: Option<String>, claimed_at: Timestamp) -> Self {
        Self {
            key,
            content,
            claimed_at,
        }
    }
}

/// Result of a guard claim attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// This caller created the guard.
    Claimed,
    /// A guard already occupied the key.
    AlreadyClaimed,
}
