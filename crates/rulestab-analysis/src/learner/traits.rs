//! Learner traits.

use rulestab_core::errors::TrainingError;

use super::{Dataset, FitParams, LearnerParams};
use crate::rules::MasterRuleBase;

/// A stochastic rule-based classifier.
pub trait RuleLearner {
    /// Optimize a rule base on `train`. Stochasticity must come only from
    /// `params.random_seed`.
    fn fit(&mut self, train: &Dataset, params: &FitParams) -> Result<(), TrainingError>;

    /// Snapshot of the learned rules, one rule base per class.
    fn rule_base(&self) -> MasterRuleBase;

    /// Predicted class label for every row.
    fn forward(&self, features: &[Vec<f64>]) -> Vec<usize>;
}

/// Builds a fresh, untrained learner for each trial.
///
/// Shared across worker threads when trials run in parallel, hence `Sync`.
pub trait LearnerFactory: Sync {
    type Learner: RuleLearner;

    fn build(&self, params: &LearnerParams) -> Self::Learner;
}

impl<F, L> LearnerFactory for F
where
    F: Fn(&LearnerParams) -> L + Sync,
    L: RuleLearner,
{
    type Learner = L;

    fn build(&self, params: &LearnerParams) -> L {
        self(params)
    }
}
