//! Core error types for taskrank-core.
//!
//! The scoring engine itself has no error states. Everything here belongs to
//! the boundary: configuration on disk and the request gateway that turns
//! untrusted input into task records.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for taskrank-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Request rejected by the gateway
    #[error("Request error: {0}")]
    Gateway(#[from] GatewayError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config directory could not be resolved or created
    #[error("Failed to prepare config directory {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Broad failure category reported alongside every gateway rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something we cannot score
    ClientInput,
    /// Something went wrong on our side
    Internal,
}

/// Rejections produced while turning a request body into task records.
///
/// Task positions are 1-based, matching how a user counts the entries they
/// submitted.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid JSON in request body")]
    MalformedBody(#[source] serde_json::Error),

    #[error("No tasks provided")]
    EmptyTaskList,

    #[error("tasks must be a list of task objects")]
    TasksNotList,

    #[error("Task {position} is missing required fields")]
    MissingFields { position: usize },

    #[error("Task {position} has invalid due_date format. Use YYYY-MM-DD")]
    InvalidDueDate { position: usize },

    #[error("Task {position} importance must be between 1 and 10")]
    ImportanceOutOfRange { position: usize },

    #[error("Task {position} estimated_hours must be at least 0.1")]
    HoursTooLow { position: usize },

    #[error("Task {position} has invalid data: {message}")]
    InvalidData { position: usize, message: String },

    #[error("limit must be a positive integer")]
    InvalidLimit,

    #[error("Server error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Internal(_) => ErrorKind::Internal,
            _ => ErrorKind::ClientInput,
        }
    }

    /// HTTP-equivalent status for an outer transport.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::ClientInput => 400,
            ErrorKind::Internal => 500,
        }
    }

    pub(crate) fn invalid_data(position: usize, message: impl Into<String>) -> Self {
        GatewayError::InvalidData {
            position,
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
