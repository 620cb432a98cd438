//! Typed per-class statistics.
//!
//! The merge operator applied to each statistic is fixed by its type:
//! `PatternStats::absorb` sums counts and keeps first-seen scores,
//! `VariableUsageCounter::absorb` sums usage. Callers cannot pick the wrong
//! operator.

use serde::Serialize;

use super::codec::Pattern;
use super::merge::{merge_additive, merge_first_write_wins, OrderedMap};
use crate::rules::UNUSED_ANTECEDENT;

/// Pattern occurrence counts and quality scores for one class.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatternStats {
    counts: OrderedMap<Pattern, u64>,
    scores: OrderedMap<Pattern, f64>,
}

impl PatternStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rule from a single trial. Within a trial the latest score
    /// for a pattern replaces earlier ones.
    pub fn record(&mut self, pattern: Pattern, score: f64) {
        *self.counts.entry_or_insert(pattern.clone(), 0) += 1;
        self.scores.insert(pattern, score);
    }

    /// Fold another trial's statistics in: counts add, scores already seen
    /// are kept.
    pub fn absorb(&mut self, other: &PatternStats) {
        merge_additive(&mut self.counts, &other.counts);
        merge_first_write_wins(&mut self.scores, &other.scores);
    }

    /// Number of distinct patterns.
    pub fn unique_patterns(&self) -> usize {
        self.counts.len()
    }

    /// Total rules folded in (sum of all counts).
    pub fn total_rules(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, pattern: &Pattern) -> u64 {
        self.counts.get(pattern).copied().unwrap_or(0)
    }

    pub fn score(&self, pattern: &Pattern) -> Option<f64> {
        self.scores.get(pattern).copied()
    }

    pub fn counts(&self) -> &OrderedMap<Pattern, u64> {
        &self.counts
    }

    pub fn scores(&self) -> &OrderedMap<Pattern, f64> {
        &self.scores
    }

    /// Sort counts by count and scores by score, both descending and
    /// stable on ties.
    pub(crate) fn sort(&mut self) {
        self.counts.sort_by_value_desc();
        self.scores.sort_by_value_desc();
    }
}

/// How often each linguistic value was used, per antecedent slot, for one
/// class. The sentinel `-1` counts rules that leave the slot unused.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariableUsageCounter {
    slots: Vec<OrderedMap<i32, u64>>,
}

impl VariableUsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter with every value in `[-1, n - 1]` present at zero for each
    /// slot, so values that never appear still show up with zero usage.
    pub fn seeded(n_values_per_slot: &[usize]) -> Self {
        let slots = n_values_per_slot
            .iter()
            .map(|&n| {
                (UNUSED_ANTECEDENT..n as i32)
                    .map(|value| (value, 0))
                    .collect::<OrderedMap<i32, u64>>()
            })
            .collect();
        Self { slots }
    }

    /// Count one use of `value` in `slot`, growing the slot list if needed.
    pub fn record(&mut self, slot: usize, value: i32) {
        if slot >= self.slots.len() {
            self.slots.resize_with(slot + 1, OrderedMap::new);
        }
        *self.slots[slot].entry_or_insert(value, 0) += 1;
    }

    /// Additive fold of another counter, slot by slot.
    pub fn absorb(&mut self, other: &VariableUsageCounter) {
        if other.slots.len() > self.slots.len() {
            self.slots.resize_with(other.slots.len(), OrderedMap::new);
        }
        for (mine, theirs) in self.slots.iter_mut().zip(&other.slots) {
            merge_additive(mine, theirs);
        }
    }

    pub fn n_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, slot: usize) -> Option<&OrderedMap<i32, u64>> {
        self.slots.get(slot)
    }

    /// Usage of `value` in `slot`; absent means zero.
    pub fn count(&self, slot: usize, value: i32) -> u64 {
        self.slots
            .get(slot)
            .and_then(|usage| usage.get(&value))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `value` has an entry (possibly zero) in `slot`.
    pub fn contains(&self, slot: usize, value: i32) -> bool {
        self.slots
            .get(slot)
            .map(|usage| usage.contains_key(&value))
            .unwrap_or(false)
    }

    /// Sum over every value of `slot`, sentinel included.
    pub fn slot_total(&self, slot: usize) -> u64 {
        self.slots
            .get(slot)
            .map(|usage| usage.values().sum())
            .unwrap_or(0)
    }

    /// Non-sentinel values of `slot` with nonzero usage, in map order.
    pub fn used_values(&self, slot: usize) -> Vec<(i32, u64)> {
        self.slots
            .get(slot)
            .map(|usage| {
                usage
                    .iter()
                    .filter(|&(&value, &count)| value != UNUSED_ANTECEDENT && count > 0)
                    .map(|(&value, &count)| (value, count))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Everything aggregated for a single output class.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassStats {
    pub patterns: PatternStats,
    pub usage: VariableUsageCounter,
}

impl ClassStats {
    /// Empty class statistics with usage pre-seeded for each slot.
    pub fn seeded(n_values_per_slot: &[usize]) -> Self {
        Self {
            patterns: PatternStats::new(),
            usage: VariableUsageCounter::seeded(n_values_per_slot),
        }
    }

    pub fn absorb(&mut self, other: &ClassStats) {
        self.patterns.absorb(&other.patterns);
        self.usage.absorb(&other.usage);
    }
}
