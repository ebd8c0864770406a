//! # Adapters Module
//!
//! Adapter implementations for the Task Ledger ports.
//!
//! ## Modules
//!
//! - `storage`: In-memory and file-backed key-value stores
//! - `serializer`: bincode record encoding
//! - `infra`: Time sources

pub mod infra;
pub mod serializer;
pub mod storage;

pub use infra::{FixedTimeSource, SystemTimeSource};
pub use serializer::BincodeRecordSerializer;
pub use storage::{FileBackedKVStore, InMemoryKVStore};
