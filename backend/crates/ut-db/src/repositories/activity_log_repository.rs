use crate::{DbError, Result as DbErrorResult};

use ut_core::{ActivityRecord, ActivityStore, ListingRow, Result as CoreResult, TIMESTAMP_FORMAT};

use std::panic::Location;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use error_location::ErrorLocation;
use sqlx::SqlitePool;

pub struct ActivityLogRepository {
    pool: SqlitePool,
}

impl ActivityLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or overwrite the row keyed by `record.user_id`.
    pub async fn replace(&self, record: &ActivityRecord) -> DbErrorResult<()> {
        let last_activity = record.formatted_last_activity();

        sqlx::query(
            r#"
              INSERT OR REPLACE INTO user_activity_log (user_id, last_activity)
              VALUES (?, ?)
              "#,
        )
        .bind(record.user_id)
        .bind(last_activity)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_dashboard_listing(&self) -> DbErrorResult<Vec<ListingRow>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
              SELECT u.display_name, l.last_activity
              FROM user_activity_log l
              JOIN users u ON u.id = l.user_id
              ORDER BY l.last_activity DESC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(display_name, last_activity)| {
                Ok(ListingRow {
                    display_name,
                    last_activity: parse_timestamp(&last_activity)?,
                })
            })
            .collect()
    }

    pub async fn find_by_user(&self, user_id: i64) -> DbErrorResult<Option<ActivityRecord>> {
        let row: Option<(i64, String)> = sqlx::query_as(
            r#"
              SELECT user_id, last_activity
              FROM user_activity_log
              WHERE user_id = ?
              "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|(user_id, last_activity)| {
            Ok(ActivityRecord::new(user_id, parse_timestamp(&last_activity)?))
        })
        .transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_activity_log")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[track_caller]
fn parse_timestamp(value: &str) -> DbErrorResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        DbError::InvalidTimestamp {
            value: value.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    })
}

#[async_trait]
impl ActivityStore for ActivityLogRepository {
    async fn replace(&self, record: &ActivityRecord) -> CoreResult<()> {
        Ok(ActivityLogRepository::replace(self, record).await?)
    }

    async fn listing(&self) -> CoreResult<Vec<ListingRow>> {
        Ok(self.find_dashboard_listing().await?)
    }
}
