//! # Core Primitives
//!
//! Byte-level identity types shared by the ledger crates.

/// A 32-byte Ed25519 public key.
///
/// Identifies the authority that owns a record and signs mutating calls.
pub type PublicKey = [u8; 32];

/// Unix timestamp in seconds since epoch.
pub type Timestamp = u64;

/// Hex-encode the first 8 bytes of an identifier for log lines and error text.
pub fn short_hex(bytes: &[u8]) -> String {
    let end = bytes.len().min(8);
    hex::encode(&bytes[..end])
}
