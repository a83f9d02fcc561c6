//! Error types for synthesis.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while building or rendering a synthesis request.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A parameter is outside its allowed range.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The combination of waveform and mode is not supported.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Error message.
        message: String,
    },

    /// A configuration file could not be understood.
    #[error("config error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// WAV encoding error.
    #[cfg(feature = "wav")]
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

impl SynthError {
    /// Creates a validation error.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a config file error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns the field name for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SynthError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for SynthError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}
