//! # Guard Store Implementation

use super::*;
use crate::domain::content_key::ContentKey;
use crate::domain::entities::ClaimOutcome;
use crate::domain::errors::KVStoreError;
use crate::ports::inbound::GuardStore;

impl<KV, TS, RS> GuardStore for TaskLedgerService<KV, TS, RS>
where
    KV: KeyValueStore,
    TS: TimeSource,
    RS: RecordSerializer,
{
    fn try_claim(&mut self, key: ContentKey) -> Result<ClaimOutcome, TaskError> {
        let op = self.guard_claim_op(key, None, self.time_source.now())?;

        match self.kv_store.atomic_batch_write(vec![op]) {
            Ok(()) => {
                #[cfg(feature = "tracing-log")]
                tracing::info!("[task-ledger] Content key {} claimed", key);
                Ok(ClaimOutcome::Claimed)
            }
            Err(KVStoreError::KeyExists { .. }) => Ok(ClaimOutcome::AlreadyClaimed),
            Err(e) => Err(e.into()),
        }
    }
}
