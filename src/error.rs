//! Custom error types for Finboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Message shown for every failed unlock attempt.
///
/// The same text is used whatever went wrong (bad padding, bad JSON, corrupt
/// base64) so a failure never tells the user which file was at fault.
pub const DECRYPTION_FAILED_MESSAGE: &str = "Incorrect password or data corruption.";

/// The main error type for Finboard operations
#[derive(Error, Debug)]
pub enum FinboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A transport could not fetch a resource
    #[error("Transport error: {0}")]
    Transport(String),

    /// A resource does not exist at the deployment root
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A mandatory resource could not be loaded
    #[error("Load error: {0}")]
    Load(String),

    /// Decryption or post-decryption parsing failed
    #[error("{}", DECRYPTION_FAILED_MESSAGE)]
    Decryption,

    /// Operation not valid in the current dashboard phase
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Producing an envelope failed
    #[error("Seal error: {0}")]
    Seal(String),
}

impl FinboardError {
    /// Create a "not found" error for a resource path
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a decryption error
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption)
    }
}

impl From<std::io::Error> for FinboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Finboard operations
pub type FinboardResult<T> = Result<T, FinboardError>;
