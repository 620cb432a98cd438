//! Optimizer budget passed to every `fit` call.

use serde::{Deserialize, Serialize};

/// Genetic search budget for a single trial.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FitConfig {
    /// Generations per fit. Default: 10.
    pub generations: Option<usize>,
    /// Population size. Default: 10.
    pub population_size: Option<usize>,
    /// Checkpoint interval in generations, 0 disables. Default: 0.
    pub checkpoint_interval: Option<usize>,
}

impl FitConfig {
    pub fn effective_generations(&self) -> usize {
        self.generations.unwrap_or(10)
    }

    pub fn effective_population_size(&self) -> usize {
        self.population_size.unwrap_or(10)
    }

    pub fn effective_checkpoint_interval(&self) -> usize {
        self.checkpoint_interval.unwrap_or(0)
    }
}
