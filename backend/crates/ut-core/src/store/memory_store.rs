use crate::{ActivityRecord, ActivityStore, CoreError, ListingRow, Result};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::NaiveDateTime;

/// In-process `ActivityStore` with its own identity table.
///
/// Records every `replace` call so callers can assert on write traffic, and
/// can be switched into an unavailable state to exercise failure paths.
#[derive(Debug, Default)]
pub struct MemoryActivityStore {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    users: HashMap<i64, String>,
    records: HashMap<i64, NaiveDateTime>,
    writes: Vec<i64>,
    unavailable: bool,
}

impl MemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or rename) a user in the identity table.
    pub fn with_user(self, user_id: i64, display_name: impl Into<String>) -> Self {
        self.lock().users.insert(user_id, display_name.into());
        self
    }

    /// Make every subsequent operation fail with a store error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    /// User ids passed to `replace`, in call order.
    pub fn writes(&self) -> Vec<i64> {
        self.lock().writes.clone()
    }

    /// Stored records, unordered.
    pub fn records(&self) -> Vec<ActivityRecord> {
        self.lock()
            .records
            .iter()
            .map(|(user_id, last_activity)| ActivityRecord::new(*user_id, *last_activity))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ActivityStore for MemoryActivityStore {
    async fn replace(&self, record: &ActivityRecord) -> Result<()> {
        let mut state = self.lock();
        if state.unavailable {
            return Err(CoreError::store("memory store is unavailable"));
        }

        state.writes.push(record.user_id);
        state.records.insert(record.user_id, record.last_activity);
        Ok(())
    }

    async fn listing(&self) -> Result<Vec<ListingRow>> {
        let state = self.lock();
        if state.unavailable {
            return Err(CoreError::store("memory store is unavailable"));
        }

        // Inner join: records without an identity row are not listed
        let mut rows: Vec<ListingRow> = state
            .records
            .iter()
            .filter_map(|(user_id, last_activity)| {
                state
                    .users
                    .get(user_id)
                    .map(|name| ListingRow::new(name.clone(), *last_activity))
            })
            .collect();

        rows.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        Ok(rows)
    }
}
