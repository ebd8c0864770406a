use super::{apply_batch, scan_prefix};
use crate::domain::errors::KVStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanResult};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File-backed key-value store.
///
/// Holds the full map in memory and rewrites the file on every committed
/// batch (temp file + rename), so a crash leaves either the old or the new
/// snapshot on disk.
///
/// Each store holds an exclusive lock on `{path}.lock` until dropped. A second
/// handle on the same path would keep its own copy of the map and overwrite
/// the first handle's guards on its next flush.
pub struct FileBackedKVStore {
    data: HashMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
    lock: File,
}

impl FileBackedKVStore {
    /// Open the store at `path`, loading any existing snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`KVStoreError::Locked`] if another open store holds `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();
        let lock = Self::acquire_lock(&path)?;
        let data = Self::load_from_file(&path)?;

        if data.is_empty() {
            #[cfg(feature = "tracing-log")]
            tracing::info!("[task-ledger] 📁 No existing records at {}", path.display());
        } else {
            #[cfg(feature = "tracing-log")]
            tracing::info!(
                "[task-ledger] 💾 Loaded {} keys from {}",
                data.len(),
                path.display()
            );
        }

        Ok(Self { data, path, lock })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn acquire_lock(path: &Path) -> Result<File, KVStoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let lock_path = Self::lock_path(path);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(io_error)?;

        if file.try_lock_exclusive().is_err() {
            #[cfg(feature = "tracing-log")]
            tracing::warn!("[task-ledger] 🔒 {} is held by another store", path.display());
            return Err(KVStoreError::Locked {
                path: path.to_path_buf(),
            });
        }
        Ok(file)
    }

    fn load_from_file(path: &Path) -> Result<HashMap<Vec<u8>, Vec<u8>>, KVStoreError> {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(io_error(e)),
        };
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_error)?;

        // Format: [key_len:u32][key][value_len:u32][value]...
        let mut data = HashMap::new();
        let mut cursor = 0;
        while cursor < bytes.len() {
            let key = read_chunk(&bytes, &mut cursor)?;
            let value = read_chunk(&bytes, &mut cursor)?;
            data.insert(key, value);
        }

        Ok(data)
    }

    fn save_to_file(&self) -> Result<(), KVStoreError> {
        let mut bytes = Vec::new();
        for (key, value) in &self.data {
            bytes.extend_from_slice(&(key.len() as u32).to_le_bytes());
            bytes.extend_from_slice(key);
            bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
            bytes.extend_from_slice(value);
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        file.sync_all().map_err(io_error)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;

        Ok(())
    }
}

impl Drop for FileBackedKVStore {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.lock);
    }
}

fn io_error(e: std::io::Error) -> KVStoreError {
    KVStoreError::IOError {
        message: e.to_string(),
    }
}

fn read_chunk(bytes: &[u8], cursor: &mut usize) -> Result<Vec<u8>, KVStoreError> {
    let truncated = || KVStoreError::CorruptionError {
        message: format!("truncated record at offset {}", cursor),
    };
    let len_end = cursor.checked_add(4).ok_or_else(truncated)?;
    let len_bytes: [u8; 4] = bytes
        .get(*cursor..len_end)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(truncated)?;
    let len = u32::from_le_bytes(len_bytes) as usize;
    let end = len_end.checked_add(len).ok_or_else(truncated)?;
    let chunk = bytes.get(len_end..end).ok_or_else(truncated)?.to_vec();
    *cursor = end;
    Ok(chunk)
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(self.data.contains_key(key))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        Ok(scan_prefix(&self.data, prefix))
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        let snapshot = self.data.clone();
        apply_batch(&mut self.data, operations)?;
        if let Err(e) = self.save_to_file() {
            // Not durable, so not committed.
            self.data = snapshot;
            return Err(e);
        }
        Ok(())
    }
}
