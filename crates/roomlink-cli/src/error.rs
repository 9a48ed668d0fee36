//! Error types for the roomlink CLI.
//!
//! CliError wraps CoreError from the shared library and maps every
//! failure to a process exit code.

use roomlink_core::error::{ApiError, CoreError};
use thiserror::Error;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const NETWORK_ERROR: i32 = 2;
    pub const DEVICE_ERROR: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                CoreError::Validation(_) => exit_codes::INVALID_ARGS,
                CoreError::Api(api) => match api {
                    ApiError::Request { .. } | ApiError::Client(_) => exit_codes::NETWORK_ERROR,
                    ApiError::Status { .. } | ApiError::Decode { .. } => exit_codes::DEVICE_ERROR,
                },
            },
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
