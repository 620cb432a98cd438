//! Resolved learner and fit parameters.

use rulestab_core::config::{FitConfig, LearnerConfig};
use rulestab_core::types::FuzzySetKind;
use serde::{Deserialize, Serialize};

use crate::rules::LinguisticVariable;

/// Construction parameters handed to the learner factory on every trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerParams {
    pub n_rules: usize,
    pub n_antecedents: usize,
    pub fuzzy_type: FuzzySetKind,
    pub n_linguistic_values: usize,
    /// Precomputed partitions. When set, the learner should use these
    /// instead of building its own from `n_linguistic_values`.
    pub linguistic_variables: Option<Vec<LinguisticVariable>>,
    pub tolerance: f64,
    pub verbose: bool,
    /// Threads for the learner's own optimizer, independent of the trial
    /// loop.
    pub parallelism: usize,
}

impl LearnerParams {
    pub fn from_config(config: &LearnerConfig) -> Self {
        Self {
            n_rules: config.effective_n_rules(),
            n_antecedents: config.effective_n_antecedents(),
            fuzzy_type: config.effective_fuzzy_type(),
            n_linguistic_values: config.effective_n_linguistic_values(),
            linguistic_variables: None,
            tolerance: config.effective_tolerance(),
            verbose: config.effective_verbose(),
            parallelism: config.effective_parallelism(),
        }
    }

    pub fn with_linguistic_variables(mut self, variables: Vec<LinguisticVariable>) -> Self {
        self.linguistic_variables = Some(variables);
        self
    }
}

impl Default for LearnerParams {
    fn default() -> Self {
        Self::from_config(&LearnerConfig::default())
    }
}

/// Optimizer budget for one `fit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitParams {
    pub generations: usize,
    pub population_size: usize,
    /// 0 disables checkpointing.
    pub checkpoint_interval: usize,
    pub random_seed: Option<u64>,
}

impl FitParams {
    pub fn from_config(config: &FitConfig) -> Self {
        Self {
            generations: config.effective_generations(),
            population_size: config.effective_population_size(),
            checkpoint_interval: config.effective_checkpoint_interval(),
            random_seed: None,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..self
        }
    }
}

impl Default for FitParams {
    fn default() -> Self {
        Self::from_config(&FitConfig::default())
    }
}
