use ut_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid timestamp '{value}' in activity log: {source} {location}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Store failures surface to the core as opaque store errors
impl From<DbError> for CoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        CoreError::store(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
