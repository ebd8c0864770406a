//! Key-value store adapters.

mod file;
mod memory;

pub use file::FileBackedKVStore;
pub use memory::InMemoryKVStore;

use crate::domain::errors::KVStoreError;
use crate::ports::outbound::BatchOperation;
use std::collections::HashMap;

/// Apply a batch to a map: all preconditions first, then all writes.
///
/// Later operations see the staged effect of earlier ones in the same batch.
pub(crate) fn apply_batch(
    data: &mut HashMap<Vec<u8>, Vec<u8>>,
    operations: Vec<BatchOperation>,
) -> Result<(), KVStoreError> {
    let mut staged: HashMap<Vec<u8>, Option<Vec<u8>>> = HashMap::new();

    for op in operations {
        let current = match staged.get(op.key()) {
            Some(value) => value.clone(),
            None => data.get(op.key()).cloned(),
        };

        match op {
            BatchOperation::Create { key, value } => {
                if current.is_some() {
                    return Err(KVStoreError::KeyExists { key });
                }
                staged.insert(key, Some(value));
            }
            BatchOperation::Put { key, value } => {
                staged.insert(key, Some(value));
            }
            BatchOperation::CompareAndSwap {
                key,
                expected,
                value,
            } => {
                match current {
                    None => return Err(KVStoreError::KeyMissing { key }),
                    Some(existing) if existing != expected => {
                        return Err(KVStoreError::ValueMismatch { key })
                    }
                    Some(_) => {}
                }
                staged.insert(key, Some(value));
            }
            BatchOperation::DeleteIfMatch { key, expected } => {
                match current {
                    None => return Err(KVStoreError::KeyMissing { key }),
                    Some(existing) if existing != expected => {
                        return Err(KVStoreError::ValueMismatch { key })
                    }
                    Some(_) => {}
                }
                staged.insert(key, None);
            }
            BatchOperation::Delete { key } => {
                staged.insert(key, None);
            }
        }
    }

    for (key, value) in staged {
        match value {
            Some(value) => {
                data.insert(key, value);
            }
            None => {
                data.remove(&key);
            }
        }
    }
    Ok(())
}

/// Collect entries under `prefix`.
pub(crate) fn scan_prefix(
    data: &HashMap<Vec<u8>, Vec<u8>>,
    prefix: &[u8],
) -> Vec<(Vec<u8>, Vec<u8>)> {
    data.iter()
        .filter(|(k, _)| k.starts_with(prefix))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
