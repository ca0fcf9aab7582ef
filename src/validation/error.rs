//! Validation failures
//!
//! Each variant renders as the exact `detail` message returned to the client
//! and maps to one HTTP status.

use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Parameter n is required")]
    MissingParameter,

    #[error("Parameter n must be an integer")]
    NotAnInteger,

    #[error("Parameter n must be non-negative")]
    Negative,

    #[error("Parameter n is too large")]
    TooLarge,

    #[error("Invalid parameter n")]
    InvalidPathParameter,

    #[error("Request body is required")]
    EmptyBody,

    #[error("Failed to read request body")]
    UnreadableBody,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Body must be a JSON array")]
    NotAnArray,

    #[error("Array must not be empty")]
    EmptyArray,

    #[error("All elements must be numbers")]
    NonNumericElement,
}

impl ValidationError {
    /// 422 for missing or structurally malformed input, 400 for well-typed
    /// input whose value is unacceptable
    pub const fn status(self) -> StatusCode {
        match self {
            Self::MissingParameter
            | Self::NotAnInteger
            | Self::InvalidPathParameter
            | Self::EmptyBody
            | Self::InvalidJson
            | Self::NotAnArray
            | Self::NonNumericElement => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Negative | Self::TooLarge | Self::UnreadableBody | Self::EmptyArray => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
