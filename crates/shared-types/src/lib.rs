//! # Shared Types Crate
//!
//! Primitive identity and hash types used across the Task Ledger workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Identity types are defined once, here.
//! - **Plain Bytes**: Identities are fixed-size byte arrays; higher layers wrap
//!   them in newtypes where the distinction matters.

pub mod entities;

pub use entities::*;
