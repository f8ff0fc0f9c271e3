pub mod memory_store;

use crate::{ActivityRecord, ListingRow, Result};

use async_trait::async_trait;

/// Access to the persisted activity table and the identity table it joins.
///
/// Implementations must make `replace` an atomic replace-by-key: after it
/// returns, exactly one record exists for `record.user_id`.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Insert the record, or overwrite the existing one for the same user.
    async fn replace(&self, record: &ActivityRecord) -> Result<()>;

    /// All records joined with display names, newest first.
    async fn listing(&self) -> Result<Vec<ListingRow>>;
}
