//! Training and trial errors.

use super::error_code::{self, StabilityErrorCode};

/// Errors reported by the external learner or by trial evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainingError {
    #[error("Optimizer could not converge to a valid rule set")]
    NoValidRuleSet,

    #[error("Degenerate split: {train} training and {test} test examples")]
    DegenerateSplit { train: usize, test: usize },

    #[error("Learner predicted {predicted} labels for {expected} test examples")]
    PredictionLengthMismatch { expected: usize, predicted: usize },

    #[error("Learner failure: {0}")]
    Learner(String),
}

impl StabilityErrorCode for TrainingError {
    fn error_code(&self) -> &'static str {
        error_code::TRAINING_ERROR
    }
}

/// A single trial failed. The multi-trial run is aborted; no partial
/// results survive because every statistic is normalized by the full
/// trial count.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Trial {trial} failed: {source}")]
pub struct TrialError {
    pub trial: usize,
    #[source]
    pub source: TrainingError,
}

impl TrialError {
    pub fn new(trial: usize, source: TrainingError) -> Self {
        Self { trial, source }
    }
}

impl StabilityErrorCode for TrialError {
    fn error_code(&self) -> &'static str {
        error_code::TRIAL_ERROR
    }
}
