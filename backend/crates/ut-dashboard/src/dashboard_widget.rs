use crate::{Result, format_time_at};

use ut_core::{ActivityLog, Clock, ListingRow};

use std::sync::Arc;

use askama::Template;
use chrono::NaiveDateTime;

/// Registration key of the login-history widget.
pub const WIDGET_KEY: &str = "user_tracker_widget";
/// Heading shown above the login-history widget.
pub const WIDGET_TITLE: &str = "Admin Login History";

#[derive(Template)]
#[template(path = "dashboard_widget.html")]
struct DashboardWidgetTemplate {
    rows: Vec<WidgetRow>,
}

/// Cell text, already escaped with named entities.
struct WidgetRow {
    display_name: String,
    last_activity: String,
}

impl WidgetRow {
    fn new(display_name: &str, last_activity: &str) -> Self {
        Self {
            display_name: html_escape::encode_quoted_attribute(display_name).into_owned(),
            last_activity: html_escape::encode_quoted_attribute(last_activity).into_owned(),
        }
    }
}

/// Renders the activity listing as an HTML table.
#[derive(Clone)]
pub struct DashboardWidget {
    log: ActivityLog,
    clock: Arc<dyn Clock>,
}

impl DashboardWidget {
    /// Uses the log's clock for "now".
    pub fn new(log: ActivityLog) -> Self {
        let clock = log.clock();
        Self { log, clock }
    }

    /// Fetch the current listing and render it.
    pub async fn render(&self) -> Result<String> {
        let listing = self.log.fetch_listing().await?;
        self.render_listing(&listing)
    }

    /// One header row plus one row per entry. Every cell is HTML-escaped
    /// (`&lt;`, `&amp;`, `&quot;`).
    pub fn render_listing(&self, listing: &[ListingRow]) -> Result<String> {
        let rows = listing
            .iter()
            .map(|row| WidgetRow::new(&row.display_name, &self.format_time(row.last_activity)))
            .collect();

        Ok(DashboardWidgetTemplate { rows }.render()?)
    }

    pub fn format_time(&self, last_activity: NaiveDateTime) -> String {
        format_time_at(last_activity, self.clock.now())
    }
}
