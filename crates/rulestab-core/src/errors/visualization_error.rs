//! Usage visualizer errors.

use super::error_code::{self, StabilityErrorCode};

/// Errors raised while building or rendering usage charts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VisualizationError {
    #[error("Unknown class index {class} ({available} classes aggregated)")]
    UnknownClass { class: usize, available: usize },

    #[error("Unknown antecedent slot {slot} ({available} slots)")]
    UnknownSlot { slot: usize, available: usize },

    #[error("No trials aggregated")]
    EmptyState,

    #[error("Plot surface failed: {0}")]
    Surface(String),
}

impl StabilityErrorCode for VisualizationError {
    fn error_code(&self) -> &'static str {
        error_code::VISUALIZATION_ERROR
    }
}
