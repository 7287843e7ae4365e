use pd_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Request not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("Invalid request data: {source} {location}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn not_found(id: &str) -> Self {
        Self::NotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for StoreError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
