//! Error types for fuel-calc

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// A numeric input outside the positive, finite range a formula needs
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Vehicle profile not found: {0}")]
    ProfileNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn invalid_input(field: impl Into<String>, value: f64, reason: &'static str) -> Self {
        Error::InvalidInput {
            field: field.into(),
            value,
            reason,
        }
    }

    /// Prefix the field of an `InvalidInput` error, e.g. `distance` -> `vehicle1.distance`
    pub fn with_field_prefix(self, prefix: &str) -> Self {
        match self {
            Error::InvalidInput {
                field,
                value,
                reason,
            } => Error::InvalidInput {
                field: format!("{}.{}", prefix, field),
                value,
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
