//! Error types and handling for Valet
//!
//! This module defines the error types used throughout the crate,
//! providing consistent error handling and reporting.

use thiserror::Error;

/// Result type alias for Valet operations
pub type Result<T> = std::result::Result<T, ValetError>;

/// Main error type for Valet
#[derive(Debug, Error)]
pub enum ValetError {
    /// Entering a garage while already parked
    #[error("vehicle {plate} is already parked in garage {garage}")]
    AlreadyParked { plate: String, garage: String },

    /// Exiting while not parked anywhere
    #[error("vehicle {plate} is not currently parked in any garage")]
    NotParked { plate: String },

    /// Terminating a parking session that already ended
    #[error("parking session {session} is already terminated")]
    SessionClosed { session: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ValetError {
    /// Create a new already-parked error
    pub fn already_parked<S: Into<String>>(plate: S, garage: S) -> Self {
        ValetError::AlreadyParked {
            plate: plate.into(),
            garage: garage.into(),
        }
    }

    /// Create a new not-parked error
    pub fn not_parked<S: Into<String>>(plate: S) -> Self {
        ValetError::NotParked {
            plate: plate.into(),
        }
    }

    /// Create a new session-closed error
    pub fn session_closed<S: Into<String>>(session: S) -> Self {
        ValetError::SessionClosed {
            session: session.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ValetError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        ValetError::Config {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        ValetError::Io {
            message: message.into(),
        }
    }

    /// Whether this error is a recoverable parking-state precondition
    /// failure, as opposed to an infrastructure failure.
    ///
    /// The journal replay logs these and keeps going; anything else
    /// aborts the run.
    pub fn is_state_violation(&self) -> bool {
        matches!(
            self,
            ValetError::AlreadyParked { .. }
                | ValetError::NotParked { .. }
                | ValetError::SessionClosed { .. }
                | ValetError::Validation { .. }
        )
    }
}

impl From<std::io::Error> for ValetError {
    fn from(err: std::io::Error) -> Self {
        ValetError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ValetError {
    fn from(err: serde_yaml::Error) -> Self {
        ValetError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ValetError {
    fn from(err: serde_json::Error) -> Self {
        ValetError::Serialization {
            message: err.to_string(),
        }
    }
}
