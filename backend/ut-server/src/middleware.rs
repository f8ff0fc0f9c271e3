use crate::{AppState, HttpPlatform};

use ut_dashboard::RequestDispatcher;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use log::warn;

/// Records the caller's activity before every admin request.
///
/// The write is best-effort: a failed update is logged and the request
/// carries on.
pub async fn track_activity(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let platform = HttpPlatform::from_headers(request.headers(), state.user_header());
    let dispatcher = RequestDispatcher::new(state.activity_log.clone(), &platform);

    if let Err(e) = dispatcher.on_authenticated_request().await {
        warn!("Failed to record activity for {}: {}", request.uri(), e);
    }

    next.run(request).await
}
