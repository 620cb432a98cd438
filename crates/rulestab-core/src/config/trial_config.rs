//! Trial loop configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the outer trial loop.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrialConfig {
    /// Number of independent trials. Default: 30.
    pub count: Option<usize>,
    /// Worker threads for the trial loop. 1 runs sequentially. Default: 1.
    pub parallelism: Option<usize>,
    /// Fraction of examples held out for evaluation. Default: 0.33.
    pub test_fraction: Option<f64>,
}

impl TrialConfig {
    /// Returns the effective trial count, defaulting to 30.
    pub fn effective_count(&self) -> usize {
        self.count.unwrap_or(30)
    }

    /// Returns the effective trial-loop parallelism, defaulting to 1.
    pub fn effective_parallelism(&self) -> usize {
        self.parallelism.unwrap_or(1)
    }

    /// Returns the effective holdout fraction, defaulting to 0.33.
    pub fn effective_test_fraction(&self) -> f64 {
        self.test_fraction.unwrap_or(0.33)
    }
}
