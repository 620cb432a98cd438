//! Structured ranking of one class's aggregated statistics.

use serde::Serialize;

use crate::aggregation::AggregateState;
use crate::patterns::Pattern;
use crate::rules::RuleBase;

/// One of the most frequent patterns of a class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPattern {
    pub pattern: Pattern,
    /// Human-readable `IF ... IS ...` form.
    pub rendered: String,
    pub count: u64,
    /// `count / n_trials`.
    pub frequency: f64,
    pub score: Option<f64>,
}

/// A linguistic value with nonzero usage in one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedValue {
    pub value: i32,
    pub name: String,
    pub count: u64,
    /// `count / n_trials`.
    pub frequency: f64,
}

/// Usage of one antecedent slot. Only built for slots where some
/// non-sentinel value was used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVariable {
    pub slot: usize,
    pub name: String,
    pub values: Vec<RankedValue>,
}

/// The ranked view of one class, as printed by the text report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedClass {
    pub class: usize,
    pub name: String,
    pub unique_patterns: usize,
    pub patterns: Vec<RankedPattern>,
    pub variables: Vec<RankedVariable>,
}

/// Rank `class`: its `rule_cutoff` most frequent patterns and, per slot, up
/// to `variable_cutoff` used values by usage. Ties keep first-seen order.
/// `None` when the class was never aggregated.
pub fn rank_class(
    state: &AggregateState,
    class: usize,
    name: &str,
    rule_cutoff: usize,
    variable_cutoff: usize,
) -> Option<RankedClass> {
    let stats = state.class(class)?;
    let n = state.n_trials().max(1) as f64;
    let fallback = RuleBase::default();
    let rule_base = state.reference_rule_base(class).unwrap_or(&fallback);

    let patterns = stats
        .patterns
        .counts()
        .ranked()
        .into_iter()
        .take(rule_cutoff)
        .map(|(pattern, &count)| RankedPattern {
            pattern: pattern.clone(),
            rendered: pattern
                .antecedents()
                .map(|antecedents| rule_base.render(&antecedents))
                .unwrap_or_else(|_| pattern.to_string()),
            count,
            frequency: count as f64 / n,
            score: stats.patterns.score(pattern),
        })
        .collect();

    let variables = (0..stats.usage.n_slots())
        .filter_map(|slot| {
            // Sentinel and zero-usage values are already filtered out.
            let mut used = stats.usage.used_values(slot);
            if used.is_empty() {
                return None;
            }
            used.sort_by(|a, b| b.1.cmp(&a.1));
            let variable = rule_base.antecedents.get(slot);
            let values = used
                .into_iter()
                .take(variable_cutoff)
                .map(|(value, count)| RankedValue {
                    value,
                    name: variable.map_or_else(|| format!("#{value}"), |v| v.display_value(value)),
                    count,
                    frequency: count as f64 / n,
                })
                .collect();
            Some(RankedVariable {
                slot,
                name: variable.map_or_else(|| format!("x{slot}"), |v| v.name.clone()),
                values,
            })
        })
        .collect();

    Some(RankedClass {
        class,
        name: name.to_string(),
        unique_patterns: stats.patterns.unique_patterns(),
        patterns,
        variables,
    })
}
