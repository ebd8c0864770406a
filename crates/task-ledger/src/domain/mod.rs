//! # Domain Layer
//!
//! Pure domain logic for the Task Ledger.
//! No I/O here - only types, derivations and predicates.
//!
//! ## Modules
//!
//! - `content_key` - Content -> 16-byte guard address
//! - `entities` - TaskRecord, UniquenessGuard, TaskHandle
//! - `validation` - Ownership, length and state predicates
//! - `value_objects` - Configuration and key layout
//! - `errors` - Domain error types

pub mod content_key;
pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;
