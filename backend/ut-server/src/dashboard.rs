use crate::{AppState, HttpPlatform, PageError};

use ut_dashboard::{HostPlatform, RequestDispatcher};

use askama::Template;
use axum::{extract::State, http::HeaderMap, response::Html};
use log::error;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage {
    panels: Vec<DashboardPanel>,
}

struct DashboardPanel {
    key: String,
    title: String,
    body: String,
    failed: bool,
}

/// GET /admin/dashboard - every registered widget in its own panel
///
/// A widget that fails to render is replaced by a fallback panel; the rest of
/// the page still renders.
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, PageError> {
    let platform = HttpPlatform::from_headers(&headers, state.user_header());
    if !platform.is_user_logged_in() {
        return Err(PageError::unauthorized("dashboard requires a logged-in user"));
    }

    RequestDispatcher::new(state.activity_log.clone(), &platform).on_dashboard_setup();

    let mut panels = Vec::new();
    for widget in platform.widgets() {
        let panel = match (widget.render)().await {
            Ok(body) => DashboardPanel {
                key: widget.key,
                title: widget.title,
                body,
                failed: false,
            },
            Err(e) => {
                error!("Widget '{}' failed to render: {}", widget.key, e);
                DashboardPanel {
                    key: widget.key,
                    title: widget.title,
                    body: String::new(),
                    failed: true,
                }
            }
        };
        panels.push(panel);
    }

    Ok(Html(DashboardPage { panels }.render()?))
}
