//! Error types for sortrace.
//!
//! The race core (steppers and the driver) has no failure modes: stepper
//! exhaustion and the frame cap are ordinary control flow. Errors only arise
//! at the edges, when loading configuration, generating input, serializing
//! reports or talking to the terminal.

use thiserror::Error;

/// Result type alias for sortrace operations.
pub type RaceResult<T> = Result<T, RaceError>;

/// Unified error type for everything outside the race core.
#[derive(Debug, Error)]
pub enum RaceError {
    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== Input Errors =====
    /// Input array could not be produced.
    #[error("Input error: {0}")]
    Input(String),

    /// Unknown sorting algorithm name.
    #[error("Unknown algorithm '{0}' (expected 'bubble' or 'selection')")]
    UnknownAlgorithm(String),

    // ===== I/O Errors =====
    /// File or terminal I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RaceError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an input generation error.
    #[must_use]
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
