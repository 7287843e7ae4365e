use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required field: {field} {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid value for field {field}: expected a string {location}")]
    InvalidFieldValue {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid request status: {value} {location}")]
    InvalidRequestStatus {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        CoreError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_field_value(field: &'static str) -> Self {
        CoreError::InvalidFieldValue {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message safe to hand back to API callers (no source location)
    pub fn public_message(&self) -> String {
        match self {
            CoreError::MissingField { field, .. } => format!("Missing required field: {field}"),
            CoreError::InvalidFieldValue { field, .. } => {
                format!("Invalid value for field: {field}")
            }
            CoreError::InvalidRequestStatus { value, .. } => {
                format!("Invalid status: {value}. Valid values: draft, pending, approved, rejected")
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
