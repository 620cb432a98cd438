//! Pattern and usage extraction from a single trial's rule bases.

use super::codec::{encode, Pattern};
use super::merge::OrderedMap;
use super::stats::{ClassStats, PatternStats, VariableUsageCounter};
use crate::rules::{MasterRuleBase, RuleBase};

/// What one class's rule base contributed in one trial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    patterns: PatternStats,
    usage: VariableUsageCounter,
}

impl Extraction {
    pub fn pattern_counts(&self) -> &OrderedMap<Pattern, u64> {
        self.patterns.counts()
    }

    pub fn pattern_scores(&self) -> &OrderedMap<Pattern, f64> {
        self.patterns.scores()
    }

    pub fn slot_usage(&self) -> &VariableUsageCounter {
        &self.usage
    }

    pub fn into_class_stats(self) -> ClassStats {
        ClassStats {
            patterns: self.patterns,
            usage: self.usage,
        }
    }
}

/// Walk the rules in native order. Each rule adds one to its pattern count
/// and one to the usage of every slot value it holds (the sentinel
/// included). A pattern seen twice keeps the later score.
pub fn extract(rule_base: &RuleBase) -> Extraction {
    let mut extraction = Extraction::default();
    for rule in rule_base.iter() {
        extraction
            .patterns
            .record(encode(&rule.antecedents), rule.score);
        for (slot, &value) in rule.antecedents.iter().enumerate() {
            extraction.usage.record(slot, value);
        }
    }
    extraction
}

/// Fold every class of one trial into the running per-class statistics.
///
/// With `None`, statistics are created for each class with usage pre-seeded
/// from that class's linguistic variables. Classes that appear for the first
/// time in a later trial get the same fresh seeding before absorbing.
pub fn extract_all_classes(
    master: &MasterRuleBase,
    existing: Option<Vec<ClassStats>>,
) -> Vec<ClassStats> {
    let mut classes = existing.unwrap_or_default();

    for (class, rule_base) in master.iter().enumerate() {
        if class >= classes.len() {
            classes.push(ClassStats::seeded(&rule_base.n_linguistic_values()));
        }
        let trial = extract(rule_base).into_class_stats();
        classes[class].absorb(&trial);
    }

    classes
}
