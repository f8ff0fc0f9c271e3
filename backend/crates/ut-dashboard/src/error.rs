use ut_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Activity log error: {source} {location}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Template error: {source} {location}")]
    Template {
        source: askama::Error,
        location: ErrorLocation,
    },
}

impl From<CoreError> for DashboardError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<askama::Error> for DashboardError {
    #[track_caller]
    fn from(source: askama::Error) -> Self {
        Self::Template {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
