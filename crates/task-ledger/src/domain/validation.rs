//! # Authorization & Validation
//!
//! Pure predicates checked before any mutation. No state of their own.

use crate::domain::entities::{TaskHandle, TaskRecord};
use crate::domain::errors::TaskError;
use crate::domain::value_objects::ContentBounds;
use shared_types::PublicKey;

/// Check content length against `bounds`, counting chars.
pub fn validate_content(content: &str, bounds: &ContentBounds) -> Result<(), TaskError> {
    match content.chars().count() {
        length if length > bounds.max_chars => Err(TaskError::DescriptionTooLong {
            length,
            max: bounds.max_chars,
        }),
        length if length < bounds.min_chars => Err(TaskError::DescriptionTooShort {
            length,
            min: bounds.min_chars,
        }),
        _ => Ok(()),
    }
}

/// Check `caller` owns `record`.
pub fn ensure_owner(
    record: &TaskRecord,
    caller: &PublicKey,
    handle: TaskHandle,
) -> Result<(), TaskError> {
    if record.is_owned_by(caller) {
        Ok(())
    } else {
        Err(TaskError::Unauthorized { handle })
    }
}

/// Check a completion request is allowed.
///
/// Re-completing a completed task is rejected rather than treated as a no-op.
/// Requests with `desired == false` always pass.
pub fn ensure_completion_allowed(
    record: &TaskRecord,
    desired: bool,
    handle: TaskHandle,
) -> Result<(), TaskError> {
    if record.completed && desired {
        return Err(TaskError::TaskAlreadyCompleted { handle });
    }
    Ok(())
}
