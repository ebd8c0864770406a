//! # Content Key Derivation
//!
//! Maps task content to the fixed-size key that addresses its uniqueness guard.
//!
//! The key is the first 16 bytes of SHA-256 over the UTF-8 bytes of the
//! content. Truncation accepts the birthday bound at 128 bits; task text is
//! not a security token.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Length of a derived content key in bytes.
pub const CONTENT_KEY_LEN: usize = 16;

/// Deterministic lookup key derived from task content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentKey([u8; CONTENT_KEY_LEN]);

impl ContentKey {
    /// Derive the key for `content`.
    pub fn derive(content: &str) -> Self {
        let digest = Sha256::digest(content.as_bytes());
        let mut key = [0u8; CONTENT_KEY_LEN];
        key.copy_from_slice(&digest[..CONTENT_KEY_LEN]);
        Self(key)
    }

    pub fn as_bytes(&self) -> &[u8; CONTENT_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
