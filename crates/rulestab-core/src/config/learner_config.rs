//! Learner construction configuration.

use serde::{Deserialize, Serialize};

use crate::types::FuzzySetKind;

/// Settings forwarded to the external learner on every trial.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LearnerConfig {
    /// Number of rules to optimize. Default: 10.
    pub n_rules: Option<usize>,
    /// Maximum antecedents per rule. Default: 3.
    pub n_antecedents: Option<usize>,
    /// Linguistic values per variable. Default: 5.
    pub n_linguistic_values: Option<usize>,
    /// Fuzzy set kind. Default: t1.
    pub fuzzy_type: Option<FuzzySetKind>,
    /// Dominance score tolerance. Default: 0.01.
    pub tolerance: Option<f64>,
    /// Learner-level progress output. Default: false.
    pub verbose: Option<bool>,
    /// Threads for the learner's own optimizer. Default: 1.
    pub parallelism: Option<usize>,
}

impl LearnerConfig {
    pub fn effective_n_rules(&self) -> usize {
        self.n_rules.unwrap_or(10)
    }

    pub fn effective_n_antecedents(&self) -> usize {
        self.n_antecedents.unwrap_or(3)
    }

    pub fn effective_n_linguistic_values(&self) -> usize {
        self.n_linguistic_values.unwrap_or(5)
    }

    pub fn effective_fuzzy_type(&self) -> FuzzySetKind {
        self.fuzzy_type.unwrap_or_default()
    }

    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(0.01)
    }

    pub fn effective_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn effective_parallelism(&self) -> usize {
        self.parallelism.unwrap_or(1)
    }
}
