//! Error types for Krishi-Sahayak.

use thiserror::Error;

/// Main error type for Krishi-Sahayak operations.
#[derive(Error, Debug)]
pub enum SahayakError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Query errors surfaced directly to the user.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Empty query")]
    Empty,
}

/// Upload errors surfaced directly to the user.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Invalid image format")]
    InvalidExtension,

    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Krishi-Sahayak operations.
pub type Result<T> = std::result::Result<T, SahayakError>;
