use crate::{AppState, dashboard, health, middleware::track_activity};

use axum::{Router, middleware, routing::get};
use tower_http::catch_panic::CatchPanicLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Every admin page records the caller's activity first
    let admin = Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            track_activity,
        ));

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Admin pages
        .nest("/admin", admin)
        .with_state(state)
        .layer(CatchPanicLayer::new())
}
