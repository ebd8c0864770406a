//! # Value Objects
//!
//! Configuration and key layout for the Task Ledger.

use crate::domain::content_key::ContentKey;
use crate::domain::entities::TaskHandle;
use crate::domain::errors::TaskError;

/// Minimum task content length in chars.
pub const MIN_CONTENT_CHARS: usize = 5;

/// Maximum task content length in chars.
pub const MAX_CONTENT_CHARS: usize = 500;

/// Inclusive content length bounds, counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for ContentBounds {
    fn default() -> Self {
        Self {
            min_chars: MIN_CONTENT_CHARS,
            max_chars: MAX_CONTENT_CHARS,
        }
    }
}

/// Configuration for the ledger service.
///
/// All values have sensible defaults.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Accepted content length range.
    pub content_bounds: ContentBounds,

    /// Whether guards keep a copy of the claimed content (default: true).
    ///
    /// When `false`, guards carry only their key and claim time.
    pub retain_guard_content: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            content_bounds: ContentBounds::default(),
            retain_guard_content: true,
        }
    }
}

impl LedgerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted content length range.
    pub fn with_content_bounds(mut self, min_chars: usize, max_chars: usize) -> Self {
        self.content_bounds = ContentBounds {
            min_chars,
            max_chars,
        };
        self
    }

    /// Enable or disable content retention in guards.
    pub fn with_retain_guard_content(mut self, retain: bool) -> Self {
        self.retain_guard_content = retain;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), TaskError> {
        let ContentBounds {
            min_chars,
            max_chars,
        } = self.content_bounds;
        if min_chars == 0 {
            return Err(TaskError::InvalidConfig {
                message: "min_chars must be at least 1".to_string(),
            });
        }
        if min_chars > max_chars {
            return Err(TaskError::InvalidConfig {
                message: format!("min_chars {} exceeds max_chars {}", min_chars, max_chars),
            });
        }
        Ok(())
    }

    /// Load from environment variables.
    ///
    /// Reads `TASK_LEDGER_MIN_CHARS`, `TASK_LEDGER_MAX_CHARS` and
    /// `TASK_LEDGER_RETAIN_GUARD_CONTENT` (`true`/`false`/`1`/`0`). Unset
    /// variables keep defaults; unparseable values are `InvalidConfig`.
    pub fn from_env() -> Result<Self, TaskError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, TaskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("TASK_LEDGER_MIN_CHARS") {
            config.content_bounds.min_chars = parse_usize("TASK_LEDGER_MIN_CHARS", &val)?;
        }
        if let Some(val) = lookup("TASK_LEDGER_MAX_CHARS") {
            config.content_bounds.max_chars = parse_usize("TASK_LEDGER_MAX_CHARS", &val)?;
        }
        if let Some(val) = lookup("TASK_LEDGER_RETAIN_GUARD_CONTENT") {
            config.retain_guard_content = parse_bool("TASK_LEDGER_RETAIN_GUARD_CONTENT", &val)?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_usize(name: &str, val: &str) -> Result<usize, TaskError> {
    val.trim().parse().map_err(|_| TaskError::InvalidConfig {
        message: format!("{} is not a number: {:?}", name, val),
    })
}

fn parse_bool(name: &str, val: &str) -> Result<bool, TaskError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(TaskError::InvalidConfig {
            message: format!("{} must be true/false/1/0: {:?}", name, val),
        }),
    }
}

/// Key prefixes for the key-value store.
///
/// All keys are prefixed to namespace different record types.
#[derive(Debug, Clone, Copy)]
pub enum KeyPrefix {
    /// Task records: `t:{handle}` -> TaskRecord
    Task,
    /// Uniqueness guards: `g:{content_key}` -> UniquenessGuard
    Guard,
}

impl KeyPrefix {
    /// Get the byte prefix for this key type.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::Task => b"t:",
            KeyPrefix::Guard => b"g:",
        }
    }

    /// Build a full key with the given suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = self.as_bytes().to_vec();
        key.extend_from_slice(suffix);
        key
    }

    /// Build a task key from a handle.
    pub fn task_key(handle: &TaskHandle) -> Vec<u8> {
        KeyPrefix::Task.key(handle.as_bytes())
    }

    /// Build a guard key from a content key.
    ///
    /// The guard's address is the content key itself; there is no other index.
    pub fn guard_key(key: &ContentKey) -> Vec<u8> {
        KeyPrefix::Guard.key(key.as_bytes())
    }

    /// Recover a handle from a full task key.
    pub fn parse_task_key(key: &[u8]) -> Option<TaskHandle> {
        let suffix = key.strip_prefix(KeyPrefix::Task.as_bytes())?;
        let bytes: [u8; 32] = suffix.try_into().ok()?;
        Some(TaskHandle::from_bytes(bytes))
    }
}
