//! Configuration errors.

use super::error_code::{self, StabilityErrorCode};

/// Errors that can occur during configuration loading and validation, or
/// when caller-supplied setup is inconsistent with the data it describes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Expected {expected} class names, got {actual}")]
    ClassNameMismatch { expected: usize, actual: usize },

    #[error("Dataset has {features} feature rows but {labels} labels")]
    DatasetShape { features: usize, labels: usize },
}

impl StabilityErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
