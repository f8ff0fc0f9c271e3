#![allow(dead_code)]

//! Test infrastructure for ut-server router tests

use ut_config::Config;
use ut_core::FixedClock;
use ut_db::ConnectionManager;
use ut_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::{DateTime, Local, TimeZone};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Fixed "now" used by every test app state
pub fn test_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2013, 6, 1, 13, 5, 0).unwrap()
}

/// Create a test pool with in-memory SQLite and migrations applied
pub async fn create_test_pool() -> SqlitePool {
    ConnectionManager::connect_in_memory()
        .await
        .expect("Failed to create test database")
}

/// Create AppState for testing with a fixed clock
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::with_clock(pool, Config::default(), Arc::new(FixedClock::new(test_now())))
}

/// Create a test user in the identity table
pub async fn create_test_user(pool: &SqlitePool, id: i64, display_name: &str) {
    sqlx::query("INSERT INTO users (id, display_name) VALUES (?, ?)")
        .bind(id)
        .bind(display_name)
        .execute(pool)
        .await
        .expect("Failed to create test user");
}

/// GET `uri`, optionally as `user`
pub async fn get(app: Router, uri: &str, user: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(user) = user {
        builder = builder.header("X-User-Id", user);
    }

    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as UTF-8
pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Number of rows in the activity table
pub async fn activity_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM user_activity_log")
        .fetch_one(pool)
        .await
        .unwrap()
}
