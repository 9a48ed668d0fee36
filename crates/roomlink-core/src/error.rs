//! Error types for roomlink core.

use thiserror::Error;

pub use reqwest::StatusCode;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised by the building-API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },

    #[error("invalid response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Local precondition failures, detected before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid device UUID")]
    InvalidDeviceUuid,

    #[error("Invalid room UUID")]
    InvalidRoomUuid,

    #[error("Please provide a valid threshold (a positive number)")]
    InvalidThreshold,
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
