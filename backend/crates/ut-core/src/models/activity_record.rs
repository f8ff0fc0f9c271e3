use chrono::NaiveDateTime;

/// Storage format of `last_activity`. Lexicographic order matches time order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A user's most recent authenticated request. One record per user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub user_id: i64,
    pub last_activity: NaiveDateTime,
}

impl ActivityRecord {
    pub fn new(user_id: i64, last_activity: NaiveDateTime) -> Self {
        Self {
            user_id,
            last_activity,
        }
    }

    /// `last_activity` rendered in [`TIMESTAMP_FORMAT`].
    pub fn formatted_last_activity(&self) -> String {
        self.last_activity.format(TIMESTAMP_FORMAT).to_string()
    }
}
