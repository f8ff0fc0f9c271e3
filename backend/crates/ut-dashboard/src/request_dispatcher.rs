use crate::{DashboardWidget, HostPlatform, RenderCallback, Result, WIDGET_KEY, WIDGET_TITLE};

use ut_core::ActivityLog;

use std::sync::Arc;

use futures::FutureExt;
use log::debug;

/// Routes host lifecycle events to the activity log and the dashboard widget.
pub struct RequestDispatcher<'a> {
    log: ActivityLog,
    platform: &'a dyn HostPlatform,
}

impl<'a> RequestDispatcher<'a> {
    pub fn new(log: ActivityLog, platform: &'a dyn HostPlatform) -> Self {
        Self { log, platform }
    }

    /// Record activity for the logged-in user. Anonymous requests never touch
    /// the log. Store failures are returned to the caller.
    pub async fn on_authenticated_request(&self) -> Result<()> {
        if !self.platform.is_user_logged_in() {
            debug!("No logged-in user, skipping activity update");
            return Ok(());
        }

        let user_id = self.platform.current_user_id();
        self.log.update(user_id).await?;

        Ok(())
    }

    /// Register the login-history widget with the host.
    pub fn on_dashboard_setup(&self) {
        let widget = DashboardWidget::new(self.log.clone());

        let render: RenderCallback = Arc::new(move || {
            let widget = widget.clone();
            async move { widget.render().await }.boxed()
        });

        self.platform
            .add_dashboard_widget(WIDGET_KEY, WIDGET_TITLE, render);
    }
}
