//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
///
/// Every variant is terminal for the current call: a failed chunk aborts the
/// remaining chunk loop and the caller receives the error instead of a
/// partial result.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// A requested language, voice or emotion is not supported by the engine
    #[error("Parameters error: {message}")]
    Parameters {
        message: String,
    },

    /// Transport-level failure (connection, DNS, timeout)
    #[error("Network error: {message}")]
    Network {
        message: String,
    },

    /// The engine answered but rejected the request semantically
    #[error("Service error: {message}")]
    Service {
        message: String,
    },

    /// A required field could not be located in a received response
    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
    },
}

impl TranslationError {
    /// Shorthand for a `Parameters` error
    pub fn parameters(message: impl Into<String>) -> Self {
        TranslationError::Parameters { message: message.into() }
    }

    /// Shorthand for a `Network` error
    pub fn network(message: impl Into<String>) -> Self {
        TranslationError::Network { message: message.into() }
    }

    /// Shorthand for a `Service` error
    pub fn service(message: impl Into<String>) -> Self {
        TranslationError::Service { message: message.into() }
    }

    /// Shorthand for a `Parsing` error
    pub fn parsing(message: impl Into<String>) -> Self {
        TranslationError::Parsing { message: message.into() }
    }
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::Parameters { message: err.to_string() }
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        TranslationError::Network { message: err.to_string() }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
