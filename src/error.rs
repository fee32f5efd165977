//! Error types and handling for the `CityScope` service

use thiserror::Error;

/// Main error type for the `CityScope` service
///
/// Upstream lookup failures never surface through this type: the fetchers
/// collapse them into sentinel values or user-facing strings at the point of
/// origin, so `CityscopeError` only covers configuration and startup faults.
#[derive(Error, Debug)]
pub enum CityscopeError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// HTTP client construction errors
    #[error("HTTP client error: {message}")]
    Client { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CityscopeError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new HTTP client error
    pub fn client<S: Into<String>>(message: S) -> Self {
        Self::Client {
            message: message.into(),
        }
    }
}
