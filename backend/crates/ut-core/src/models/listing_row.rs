use chrono::NaiveDateTime;

/// An activity record joined with the user's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub display_name: String,
    pub last_activity: NaiveDateTime,
}

impl ListingRow {
    pub fn new(display_name: impl Into<String>, last_activity: NaiveDateTime) -> Self {
        Self {
            display_name: display_name.into(),
            last_activity,
        }
    }
}
