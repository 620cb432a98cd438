//! Top-level error for the end-to-end stability pipeline.

use super::error_code::StabilityErrorCode;
use super::{CodecError, ConfigError, TrialError, VisualizationError};

/// Errors that can surface from a full stability run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum StabilityError {
    #[error("Format error: {0}")]
    Format(#[from] CodecError),

    #[error("Trial error: {0}")]
    Trial(#[from] TrialError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Visualization error: {0}")]
    Visualization(#[from] VisualizationError),
}

impl StabilityErrorCode for StabilityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Format(e) => e.error_code(),
            Self::Trial(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Visualization(e) => e.error_code(),
        }
    }
}
