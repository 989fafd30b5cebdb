// --- File: crates/ptslot_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The error type shared by all ptslot crates.
///
/// The slot engine itself never fails; these variants cover the boundaries around it:
/// request validation, configuration, and calls to the external availability backend.
#[derive(Error, Debug)]
pub enum PtslotError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input rejected before it reaches the engine or the backend
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The availability backend answered with a failure
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFoundError(String),

    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// A collaborator needed for the operation is not configured
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for PtslotError {
    fn status_code(&self) -> u16 {
        match self {
            PtslotError::HttpError(_) => 502,
            PtslotError::ParseError(_) => 400,
            PtslotError::ConfigError(_) => 500,
            PtslotError::ValidationError(_) => 400,
            PtslotError::ExternalServiceError { .. } => 502,
            PtslotError::NotFoundError(_) => 404,
            PtslotError::TimeoutError(_) => 504,
            PtslotError::ServiceUnavailable(_) => 503,
            PtslotError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, PtslotError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, PtslotError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, PtslotError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| PtslotError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, PtslotError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| PtslotError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<reqwest::Error> for PtslotError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PtslotError::TimeoutError(err.to_string())
        } else if err.is_decode() {
            PtslotError::ParseError(err.to_string())
        } else {
            PtslotError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PtslotError {
    fn from(err: serde_json::Error) -> Self {
        PtslotError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for PtslotError {
    fn from(err: std::io::Error) -> Self {
        PtslotError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> PtslotError {
    PtslotError::ConfigError(message.to_string())
}

pub fn parse_error<T: fmt::Display>(message: T) -> PtslotError {
    PtslotError::ParseError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> PtslotError {
    PtslotError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> PtslotError {
    PtslotError::NotFoundError(message.to_string())
}

pub fn external_service_error<S: fmt::Display, M: fmt::Display>(
    service_name: S,
    message: M,
) -> PtslotError {
    PtslotError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn service_unavailable<T: fmt::Display>(message: T) -> PtslotError {
    PtslotError::ServiceUnavailable(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> PtslotError {
    PtslotError::InternalError(message.to_string())
}
