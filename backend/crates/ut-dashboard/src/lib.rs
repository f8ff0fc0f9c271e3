pub mod dashboard_widget;
pub mod error;
pub mod host_platform;
pub mod request_dispatcher;
pub mod time_format;

pub use dashboard_widget::{DashboardWidget, WIDGET_KEY, WIDGET_TITLE};
pub use error::{DashboardError, Result};
pub use host_platform::{HostPlatform, RenderCallback, RenderFuture};
pub use request_dispatcher::RequestDispatcher;
pub use time_format::{DAY_IN_SECONDS, format_time_at};

#[cfg(test)]
mod tests;
