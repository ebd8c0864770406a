//! # Inbound Ports (Driving Ports)
//!
//! The operations the Task Ledger exposes to callers. Transport and wire
//! encoding live outside this crate.

use crate::domain::content_key::ContentKey;
use crate::domain::entities::{ClaimOutcome, TaskHandle, TaskRecord, UniquenessGuard};
use crate::domain::errors::TaskError;
use shared_types::PublicKey;

/// Primary API for the Task Ledger.
///
/// Each mutating call is one atomic unit: it commits fully or returns an
/// error with nothing written.
pub trait TaskLedgerApi {
    /// Create a task at `handle`, owned by `owner`.
    ///
    /// ## Errors
    ///
    /// - `DescriptionTooShort` / `DescriptionTooLong`: content outside bounds
    /// - `TaskAlreadyExists`: the content was claimed before, by anyone, ever
    /// - `HandleInUse`: a record already occupies `handle`
    fn create_task(
        &mut self,
        owner: PublicKey,
        handle: TaskHandle,
        content: &str,
    ) -> Result<TaskHandle, TaskError>;

    /// Set the completion flag of a task.
    ///
    /// ## Errors
    ///
    /// - `RecordNotFound`: no record at `handle`
    /// - `Unauthorized`: `caller` is not the owner
    /// - `TaskAlreadyCompleted`: task is completed and `desired` is `true`
    fn complete_task(
        &mut self,
        handle: TaskHandle,
        caller: PublicKey,
        desired: bool,
    ) -> Result<(), TaskError>;

    /// Delete a task. Its content stays claimed.
    ///
    /// ## Errors
    ///
    /// - `RecordNotFound`: no record at `handle`
    /// - `Unauthorized`: `caller` is not the owner
    fn delete_task(&mut self, handle: TaskHandle, caller: PublicKey) -> Result<(), TaskError>;

    /// Read a task.
    ///
    /// ## Errors
    ///
    /// - `RecordNotFound`: no record at `handle`
    fn get_task(&self, handle: TaskHandle) -> Result<TaskRecord, TaskError>;

    /// All tasks owned by `owner`, in store iteration order.
    ///
    /// Full scan over task records; there is no owner index.
    fn list_tasks_for_owner(
        &self,
        owner: PublicKey,
    ) -> Result<Vec<(TaskHandle, TaskRecord)>, TaskError>;

    /// The guard for `content`, if it has been claimed.
    fn get_guard(&self, content: &str) -> Result<Option<UniquenessGuard>, TaskError>;

    /// Whether `content` has ever been claimed.
    fn is_content_claimed(&self, content: &str) -> Result<bool, TaskError>;
}

/// Direct access to the uniqueness guard store.
pub trait GuardStore {
    /// Claim `key`, creating its guard.
    ///
    /// Exactly one caller observes `Claimed` for a key over the lifetime of
    /// the store; every other attempt, now or later, sees `AlreadyClaimed`.
    /// Guards created here carry no content.
    fn try_claim(&mut self, key: ContentKey) -> Result<ClaimOutcome, TaskError>;
}
