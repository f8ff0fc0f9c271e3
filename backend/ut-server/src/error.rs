use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ut_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ut_db::DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors returned by HTML page handlers.
#[derive(Debug, Error)]
pub enum PageError {
    /// No logged-in user (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Page template failed to render (500)
    #[error("Template error: {source} {location}")]
    Template {
        #[source]
        source: askama::Error,
        location: ErrorLocation,
    },
}

impl PageError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        PageError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<askama::Error> for PageError {
    #[track_caller]
    fn from(source: askama::Error) -> Self {
        PageError::Template {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            PageError::Unauthorized { .. } => {
                log::warn!("{}", self);
                (StatusCode::UNAUTHORIZED, "<h1>401 Unauthorized</h1>")
            }
            PageError::Template { .. } => {
                log::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "<h1>500 Internal Server Error</h1>",
                )
            }
        };

        (status, Html(body)).into_response()
    }
}
