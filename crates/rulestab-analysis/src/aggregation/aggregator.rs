//! Sequential trial fold.

use tracing::{debug, info};

use super::AggregateState;
use crate::patterns::{extract_all_classes, ClassStats};
use crate::rules::MasterRuleBase;
use crate::trials::TrialOutcome;

/// Folds trial outcomes into per-class statistics.
///
/// The fold order decides which score survives for a pattern, so callers
/// that want reproducible scores fold in trial-index order.
#[derive(Debug, Default)]
pub struct StabilityAggregator {
    classes: Vec<ClassStats>,
    accuracies: Vec<f64>,
    rule_bases: Vec<MasterRuleBase>,
}

impl StabilityAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trials folded so far.
    pub fn n_trials(&self) -> usize {
        self.accuracies.len()
    }

    pub fn fold(&mut self, outcome: TrialOutcome) {
        let existing = if self.accuracies.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.classes))
        };
        self.classes = extract_all_classes(&outcome.rule_base, existing);

        debug!(
            trial = outcome.index,
            accuracy = outcome.accuracy,
            rules = outcome.rule_base.n_rules(),
            "folded trial"
        );
        self.accuracies.push(outcome.accuracy);
        self.rule_bases.push(outcome.rule_base);
    }

    /// Rank every class and freeze the result.
    pub fn finish(mut self) -> AggregateState {
        for (ix, class) in self.classes.iter_mut().enumerate() {
            class.patterns.sort();
            debug!(
                class = ix,
                unique_patterns = class.patterns.unique_patterns(),
                "class ranked"
            );
        }

        let n_trials = self.accuracies.len();
        info!(
            trials = n_trials,
            classes = self.classes.len(),
            "aggregation complete"
        );

        AggregateState {
            classes: self.classes,
            accuracies: self.accuracies,
            rule_bases: self.rule_bases,
            n_trials,
        }
    }
}

/// Fold `outcomes` in ascending trial index and finish.
pub fn aggregate(mut outcomes: Vec<TrialOutcome>) -> AggregateState {
    outcomes.sort_by_key(|o| o.index);
    let mut aggregator = StabilityAggregator::new();
    for outcome in outcomes {
        aggregator.fold(outcome);
    }
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::encode;
    use crate::rules::{LinguisticVariable, Rule, RuleBase};

    fn outcome(index: usize, antecedents: Vec<i32>, score: f64, accuracy: f64) -> TrialOutcome {
        let vars = vec![LinguisticVariable::new("x", ["low", "high"])];
        TrialOutcome {
            index,
            rule_base: MasterRuleBase::new(vec![RuleBase::new(
                vec![Rule::new(antecedents, score)],
                vars,
            )]),
            accuracy,
        }
    }

    #[test]
    fn aggregate_folds_in_index_order() {
        // Handed over out of order; trial 0 must still win the score.
        let state = aggregate(vec![
            outcome(1, vec![0], 0.5, 0.6),
            outcome(0, vec![0], 0.8, 0.8),
        ]);
        let pattern = encode(&[0]);
        assert_eq!(state.class(0).unwrap().patterns.score(&pattern), Some(0.8));
        assert_eq!(state.accuracies(), &[0.8, 0.6]);
    }

    #[test]
    fn finish_ranks_counts_descending() {
        let state = aggregate(vec![
            outcome(0, vec![1], 0.2, 1.0),
            outcome(1, vec![0], 0.4, 1.0),
            outcome(2, vec![0], 0.3, 1.0),
        ]);
        let order: Vec<&str> = state.class(0).unwrap().patterns.counts().keys().map(|p| p.as_str()).collect();
        assert_eq!(order, ["[0]", "[1]"]);
        let by_score: Vec<&str> = state.class(0).unwrap().patterns.scores().keys().map(|p| p.as_str()).collect();
        assert_eq!(by_score, ["[0]", "[1]"]);
    }

    #[test]
    fn accuracy_statistics() {
        let state = aggregate(vec![
            outcome(0, vec![0], 0.1, 0.5),
            outcome(1, vec![0], 0.1, 1.0),
        ]);
        assert!((state.mean_accuracy() - 0.75).abs() < 1e-12);
        assert!((state.std_accuracy() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn occurrence_frequency_normalizes_by_trials() {
        let state = aggregate(vec![
            outcome(0, vec![0], 0.1, 1.0),
            outcome(1, vec![1], 0.1, 1.0),
        ]);
        assert_eq!(state.occurrence_frequency(0, &encode(&[0])), Some(0.5));
        assert_eq!(state.occurrence_frequency(0, &encode(&[-1])), Some(0.0));
        assert_eq!(state.occurrence_frequency(3, &encode(&[0])), None);
    }

    #[test]
    fn empty_aggregate() {
        let state = StabilityAggregator::new().finish();
        assert_eq!(state.n_trials(), 0);
        assert_eq!(state.n_classes(), 0);
        assert!(state.mean_accuracy().is_nan());
    }
}
