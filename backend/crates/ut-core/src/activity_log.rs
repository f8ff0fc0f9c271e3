use crate::{ActivityRecord, ActivityStore, Clock, ListingRow, Result};

use std::sync::Arc;

use chrono::{NaiveDateTime, SubsecRound};
use log::debug;

/// Records and lists each user's last activity.
///
/// Cheap to clone; clones share the same store and clock.
#[derive(Clone)]
pub struct ActivityLog {
    store: Arc<dyn ActivityStore>,
    clock: Arc<dyn Clock>,
}

impl ActivityLog {
    pub fn new(store: Arc<dyn ActivityStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Replace the user's record with the current timestamp.
    pub async fn update(&self, user_id: i64) -> Result<()> {
        let record = ActivityRecord::new(user_id, self.current_timestamp());
        debug!(
            "Recording activity for user {} at {}",
            user_id,
            record.formatted_last_activity()
        );

        self.store.replace(&record).await
    }

    /// Every recorded user with their display name, newest activity first.
    pub async fn fetch_listing(&self) -> Result<Vec<ListingRow>> {
        self.store.listing().await
    }

    /// Local wall-clock time with whole-second precision.
    pub fn current_timestamp(&self) -> NaiveDateTime {
        self.clock.now().naive_local().trunc_subsecs(0)
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
