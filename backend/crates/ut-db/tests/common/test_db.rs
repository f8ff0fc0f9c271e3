use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;
use ut_db::ConnectionManager;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ConnectionManager::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a row into the identity table
pub async fn create_test_user(pool: &SqlitePool, user_id: i64, display_name: &str) {
    sqlx::query("INSERT INTO users (id, display_name) VALUES (?, ?)")
        .bind(user_id)
        .bind(display_name)
        .execute(pool)
        .await
        .expect("Failed to create test user");
}

/// 2013-04-01 at the given hour and minute
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 4, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
