//! # Task Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # End-to-end create / complete / delete scenarios
//!     ├── concurrency.rs  # Racing callers on a shared ledger
//!     ├── persistence.rs  # File-backed store across reopen
//!     └── properties.rs   # proptest invariants
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p task-ledger-tests
//! RUST_LOG=task_ledger=debug cargo test -p task-ledger-tests -- --nocapture
//! ```

pub mod integration;

use task_ledger::{
    BincodeRecordSerializer, InMemoryKVStore, KeyValueStore, LedgerConfig, SystemTimeSource,
    TaskLedgerDependencies, TaskLedgerService,
};

/// In-memory ledger used across the suite.
pub type MemoryLedger =
    TaskLedgerService<InMemoryKVStore, SystemTimeSource, BincodeRecordSerializer>;

/// Install a test-friendly tracing subscriber once; `RUST_LOG` selects levels.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a ledger over `kv_store` with default config.
pub fn ledger_over<KV: KeyValueStore>(
    kv_store: KV,
) -> TaskLedgerService<KV, SystemTimeSource, BincodeRecordSerializer> {
    let deps = TaskLedgerDependencies {
        kv_store,
        time_source: SystemTimeSource,
        serializer: BincodeRecordSerializer,
    };
    match TaskLedgerService::new(deps, LedgerConfig::default()) {
        Ok(service) => service,
        Err(e) => panic!("default config must validate: {e}"),
    }
}

/// Fresh in-memory ledger.
pub fn memory_ledger() -> MemoryLedger {
    ledger_over(InMemoryKVStore::new())
}
