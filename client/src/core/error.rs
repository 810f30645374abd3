//! # Common Error Types
//!
//! Consolidated error handling for the banking client.
//!
//! ## Error Categories
//!
//! - **Api**: Backend communication errors (network, HTTP status, JSON parsing)
//! - **Validation**: Input or precondition violations the user can fix
//! - **State**: An operation was requested in a pipeline state that does not allow it
//! - **Timeout**: A backend call exceeded its client-side deadline
//! - **Config**: Invalid environment or flow configuration
//! - **NotFound**: A referenced account, payee or flow does not exist
//!
//! ## Error Conversion
//!
//! - `String` → `AppError::Api`
//! - `&str` → `AppError::Api`
//! - `lib_utils::envs::Error` → `AppError::Config`
//!
//! Form-level validation does not use this type: forms report a per-field
//! [`crate::forms::FieldErrors`] map instead.

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use banking_client::core::error::AppError;
///
/// let api_err = AppError::Api("Connection refused".to_string());
/// let state_err = AppError::State("cannot confirm while fees are loading".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: Connection refused");
/// assert_eq!(state_err.to_string(), "State error: cannot confirm while fees are loading");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Network failures, non-2xx statuses (carrying the backend's `error` message)
    /// and malformed response bodies.
    #[error("API error: {0}")]
    Api(String),

    /// Input validation error.
    ///
    /// Raised when a precondition the user controls is not met, e.g. confirming a
    /// flow that requires a fee quote before one is available.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid pipeline state transition.
    #[error("State error: {0}")]
    State(String),

    /// Client-side deadline exceeded.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) => {
                AppError::Config(format!("{} must be set", name))
            }
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{} has an invalid format", name))
            }
        }
    }
}
