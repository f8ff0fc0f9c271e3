use chrono::{DateTime, Local, NaiveDateTime, TimeDelta};

pub const DAY_IN_SECONDS: i64 = 86_400;

/// Human-readable last-activity time relative to `now`.
///
/// `Today at 1:05AM`, `Yesterday at 11:30PM`, or `Jun 1 2013 at 1:05AM`.
/// "Yesterday" is the calendar date of the instant exactly 86400 seconds
/// before `now`, so a day that is 23 or 25 hours long (DST) can misclassify.
pub fn format_time_at(last_activity: NaiveDateTime, now: DateTime<Local>) -> String {
    let date = last_activity.date();

    let day = if date == now.date_naive() {
        String::from("Today")
    } else if date == (now - TimeDelta::seconds(DAY_IN_SECONDS)).date_naive() {
        String::from("Yesterday")
    } else {
        last_activity.format("%b %-d %Y").to_string()
    };

    format!("{} at {}", day, last_activity.format("%-I:%M%p"))
}
