use crate::{DbError, Result};

use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Schema for the activity table and the identity table it joins.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the SQLite database backing the activity log and brings its schema
/// up to date.
pub struct ConnectionManager {
    database_path: PathBuf,
    max_connections: u32,
}

impl ConnectionManager {
    pub fn new(database_path: impl Into<PathBuf>, max_connections: u32) -> Self {
        Self {
            database_path: database_path.into(),
            max_connections,
        }
    }

    pub async fn connect(&self) -> Result<SqlitePool> {
        // Create directory if it doesn't exist
        if let Some(parent) = self.database_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create database directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        info!("Connecting to database: {}", self.database_path.display());

        let options = SqliteConnectOptions::new()
            .filename(&self.database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    /// Single-connection in-memory database with the schema applied.
    pub async fn connect_in_memory() -> Result<SqlitePool> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true);

        // In-memory needs single connection
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        MIGRATOR.run(pool).await.map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Database migrations complete");
        Ok(())
    }
}
