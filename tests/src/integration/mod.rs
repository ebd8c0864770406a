//! # Integration Tests
//!
//! Exercises the ledger through its public API only.

pub mod concurrency;
pub mod flows;
pub mod persistence;
pub mod properties;
