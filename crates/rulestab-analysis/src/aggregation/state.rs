//! Read-only result of a multi-trial aggregation.

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::patterns::{ClassStats, Pattern};
use crate::rules::{MasterRuleBase, RuleBase};

/// Per-class statistics plus the raw per-trial accuracies and rule bases.
///
/// Only `StabilityAggregator::finish` builds one. Within each class, counts
/// are ordered by count and scores by score, both descending with ties in
/// first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateState {
    pub(crate) classes: Vec<ClassStats>,
    pub(crate) accuracies: Vec<f64>,
    pub(crate) rule_bases: Vec<MasterRuleBase>,
    pub(crate) n_trials: usize,
}

impl AggregateState {
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn classes(&self) -> &[ClassStats] {
        &self.classes
    }

    pub fn class(&self, ix: usize) -> Option<&ClassStats> {
        self.classes.get(ix)
    }

    /// Holdout accuracy of every trial, in trial-index order.
    pub fn accuracies(&self) -> &[f64] {
        &self.accuracies
    }

    /// Learned rule bases of every trial, in trial-index order.
    pub fn rule_bases(&self) -> &[MasterRuleBase] {
        &self.rule_bases
    }

    /// Mean holdout accuracy. NaN when no trial was aggregated.
    pub fn mean_accuracy(&self) -> f64 {
        self.accuracies.iter().mean()
    }

    /// Population standard deviation of the holdout accuracy. NaN when no
    /// trial was aggregated.
    pub fn std_accuracy(&self) -> f64 {
        self.accuracies.iter().population_std_dev()
    }

    /// Occurrences of `pattern` in `class` divided by the trial count.
    pub fn occurrence_frequency(&self, class: usize, pattern: &Pattern) -> Option<f64> {
        if self.n_trials == 0 {
            return None;
        }
        self.classes
            .get(class)
            .map(|stats| stats.patterns.count(pattern) as f64 / self.n_trials as f64)
    }

    /// A rule base of `class` from the earliest trial that has one. Its
    /// linguistic variables name the slots and values of that class.
    pub fn reference_rule_base(&self, class: usize) -> Option<&RuleBase> {
        self.rule_bases.iter().find_map(|master| master.get(class))
    }
}
