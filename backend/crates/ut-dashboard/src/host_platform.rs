use crate::Result;

use std::sync::Arc;

use futures::future::BoxFuture;

pub type RenderFuture = BoxFuture<'static, Result<String>>;

/// Produces a widget's HTML each time the dashboard is drawn.
pub type RenderCallback = Arc<dyn Fn() -> RenderFuture + Send + Sync>;

/// What the dispatcher needs from the hosting platform: who is making the
/// request, and a place to hang dashboard widgets.
pub trait HostPlatform: Send + Sync {
    fn is_user_logged_in(&self) -> bool;

    /// Only meaningful when `is_user_logged_in` is true.
    fn current_user_id(&self) -> i64;

    fn add_dashboard_widget(&self, key: &str, title: &str, render: RenderCallback);
}
